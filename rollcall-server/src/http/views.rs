//! HTML rendering
//!
//! Templates are compiled into the binary and loaded once into a shared
//! minijinja environment. `.html` names get HTML auto-escaping.

use axum::response::Html;
use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;

use super::error::ApiError;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("student_list.html", include_str!("../../templates/student_list.html")),
    ("no_students.html", include_str!("../../templates/no_students.html")),
    ("add_student.html", include_str!("../../templates/add_student.html")),
    ("update_student.html", include_str!("../../templates/update_student.html")),
    ("student_detail.html", include_str!("../../templates/student_detail.html")),
    ("course_list.html", include_str!("../../templates/course_list.html")),
    ("no_courses.html", include_str!("../../templates/no_courses.html")),
    ("add_course.html", include_str!("../../templates/add_course.html")),
    ("update_course.html", include_str!("../../templates/update_course.html")),
    ("course_detail.html", include_str!("../../templates/course_detail.html")),
    ("exists.html", include_str!("../../templates/exists.html")),
    ("error.html", include_str!("../../templates/error.html")),
];

static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    for &(name, source) in TEMPLATES {
        // A template that fails to parse is absent; rendering it yields a 500
        if let Err(e) = env.add_template(name, source) {
            tracing::error!(template = name, "failed to load template: {}", e);
        }
    }
    env
});

/// Render a named template with the given context.
pub fn render<S: Serialize>(name: &str, ctx: S) -> Result<Html<String>, ApiError> {
    let html = render_string(name, ctx)?;
    Ok(Html(html))
}

pub(crate) fn render_string<S: Serialize>(name: &str, ctx: S) -> Result<String, minijinja::Error> {
    ENV.get_template(name)?.render(ctx)
}
