use crate::notify::Notice;
use super::render_notice;

const LOGIN: &str = include_str!("../../templates/login.html");

pub fn render(notice: Option<&Notice>) -> String {
    LOGIN.replace("{{notice}}", &render_notice(notice))
}
