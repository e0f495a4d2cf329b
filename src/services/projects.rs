use reqwest::Method;

use crate::{
    client::{Client, Response, set_options},
    context::Context,
    error::Error,
    http::HttpClient,
    models::{ListOptions, Paginated, Project},
    services::{escape, require},
};

const PROJECTS_PATH: &str = "groups";

/// Endpoints managing projects.
pub struct ProjectsService<'a, H> {
    client: &'a Client<H>,
}

impl<H> Client<H> {
    pub fn projects(&self) -> ProjectsService<'_, H> {
        ProjectsService { client: self }
    }
}

impl<H: HttpClient> ProjectsService<'_, H> {
    /// Lists the projects the caller has access to.
    pub async fn list(
        &self,
        ctx: &Context,
        options: Option<&ListOptions>,
    ) -> Result<(Paginated<Project>, Response), Error> {
        let path = set_options(PROJECTS_PATH, options)?;
        let request = self.client.new_request(Method::GET, &path)?;
        self.client.send(ctx, request).await
    }

    pub async fn get(&self, ctx: &Context, project_id: &str) -> Result<(Project, Response), Error> {
        require("projectID", project_id)?;

        let path = format!("{PROJECTS_PATH}/{}", escape(project_id));
        let request = self.client.new_request(Method::GET, &path)?;
        self.client.send(ctx, request).await
    }

    pub async fn get_by_name(
        &self,
        ctx: &Context,
        project_name: &str,
    ) -> Result<(Project, Response), Error> {
        require("projectName", project_name)?;

        let path = format!("{PROJECTS_PATH}/byName/{}", escape(project_name));
        let request = self.client.new_request(Method::GET, &path)?;
        self.client.send(ctx, request).await
    }

    /// Creates a project. `project` must carry the name and the organization.
    pub async fn create(
        &self,
        ctx: &Context,
        project: &Project,
    ) -> Result<(Project, Response), Error> {
        let request = self
            .client
            .new_request_with_body(Method::POST, PROJECTS_PATH, project)?;
        self.client.send(ctx, request).await
    }

    pub async fn delete(&self, ctx: &Context, project_id: &str) -> Result<Response, Error> {
        require("projectID", project_id)?;

        let path = format!("{PROJECTS_PATH}/{}", escape(project_id));
        let request = self.client.new_request(Method::DELETE, &path)?;
        self.client.send_and_discard(ctx, request).await
    }
}
