use reqwest::Method;

use crate::{
    client::{Client, Response, set_options},
    context::Context,
    error::Error,
    http::HttpClient,
    models::{ListOptions, Paginated, ProjectIpAccessList},
    services::{escape, require},
};

/// Endpoints managing the IP access list of a project.
pub struct ProjectIpAccessListService<'a, H> {
    client: &'a Client<H>,
}

impl<H> Client<H> {
    pub fn project_ip_access_list(&self) -> ProjectIpAccessListService<'_, H> {
        ProjectIpAccessListService { client: self }
    }
}

fn access_list_path(group_id: &str) -> String {
    format!("groups/{}/accessList", escape(group_id))
}

impl<H: HttpClient> ProjectIpAccessListService<'_, H> {
    /// Lists the access list entries of a project.
    pub async fn list(
        &self,
        ctx: &Context,
        group_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<(Paginated<ProjectIpAccessList>, Response), Error> {
        require("groupId", group_id)?;

        let path = set_options(&access_list_path(group_id), options)?;
        let request = self.client.new_request(Method::GET, &path)?;
        self.client.send(ctx, request).await
    }

    /// Gets one entry by its IP address, CIDR block or security group.
    pub async fn get(
        &self,
        ctx: &Context,
        group_id: &str,
        entry: &str,
    ) -> Result<(ProjectIpAccessList, Response), Error> {
        require("groupId", group_id)?;
        require("accessListEntry", entry)?;

        let path = format!("{}/{}", access_list_path(group_id), escape(entry));
        let request = self.client.new_request(Method::GET, &path)?;
        self.client.send(ctx, request).await
    }

    /// Adds entries to the access list. Returns the whole list afterwards.
    pub async fn create(
        &self,
        ctx: &Context,
        group_id: &str,
        entries: &[ProjectIpAccessList],
    ) -> Result<(Paginated<ProjectIpAccessList>, Response), Error> {
        require("groupId", group_id)?;

        let request =
            self.client
                .new_request_with_body(Method::POST, &access_list_path(group_id), entries)?;
        self.client.send(ctx, request).await
    }

    pub async fn delete(&self, ctx: &Context, group_id: &str, entry: &str) -> Result<Response, Error> {
        require("groupId", group_id)?;
        require("accessListEntry", entry)?;

        let path = format!("{}/{}", access_list_path(group_id), escape(entry));
        let request = self.client.new_request(Method::DELETE, &path)?;
        self.client.send_and_discard(ctx, request).await
    }
}
