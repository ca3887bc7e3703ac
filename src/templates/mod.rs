use askama::Template;

use crate::models::DashboardView;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub prefix: String,
    pub view: DashboardView,
}
