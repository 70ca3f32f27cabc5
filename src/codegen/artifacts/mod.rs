pub mod commands;
pub mod entity;
pub mod handlers;
pub mod queries;
pub mod repository;
pub mod repository_interface;

/// askama drops the template's final newline; put exactly one back.
fn terminate(mut code: String) -> String {
    if !code.ends_with('\n') {
        code.push('\n');
    }
    code
}
