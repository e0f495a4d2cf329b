use reqwest::Method;

use crate::{
    client::{Client, Response, set_options},
    context::Context,
    error::Error,
    http::HttpClient,
    models::{Cluster, ListOptions, Paginated},
    services::{escape, require},
};

/// Endpoints managing the clusters of a project.
pub struct ClustersService<'a, H> {
    client: &'a Client<H>,
}

impl<H> Client<H> {
    pub fn clusters(&self) -> ClustersService<'_, H> {
        ClustersService { client: self }
    }
}

fn clusters_path(group_id: &str) -> String {
    format!("groups/{}/clusters", escape(group_id))
}

fn cluster_path(group_id: &str, cluster_name: &str) -> String {
    format!("{}/{}", clusters_path(group_id), escape(cluster_name))
}

impl<H: HttpClient> ClustersService<'_, H> {
    /// Lists the clusters of a project.
    ///
    /// # Arguments
    ///
    /// * `group_id` - The project the clusters belong to.
    /// * `options` - Optional pagination options.
    pub async fn list(
        &self,
        ctx: &Context,
        group_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<Cluster>, Response), Error> {
        require("groupId", group_id)?;

        let path = set_options(&clusters_path(group_id), options)?;
        let request = self.client.new_request(Method::GET, &path)?;
        let (page, response) = self.client.send::<Paginated<Cluster>>(ctx, request).await?;

        Ok((page.results, response))
    }

    /// Gets a single cluster by name.
    pub async fn get(
        &self,
        ctx: &Context,
        group_id: &str,
        cluster_name: &str,
    ) -> Result<(Cluster, Response), Error> {
        require("groupId", group_id)?;
        require("clusterName", cluster_name)?;

        let request = self
            .client
            .new_request(Method::GET, &cluster_path(group_id, cluster_name))?;
        self.client.send(ctx, request).await
    }

    /// Creates a cluster in a project.
    pub async fn create(
        &self,
        ctx: &Context,
        group_id: &str,
        cluster: &Cluster,
    ) -> Result<(Cluster, Response), Error> {
        require("groupId", group_id)?;

        let request =
            self.client
                .new_request_with_body(Method::POST, &clusters_path(group_id), cluster)?;
        self.client.send(ctx, request).await
    }

    /// Modifies a cluster. Only the fields set on `cluster` are changed.
    pub async fn update(
        &self,
        ctx: &Context,
        group_id: &str,
        cluster_name: &str,
        cluster: &Cluster,
    ) -> Result<(Cluster, Response), Error> {
        require("groupId", group_id)?;
        require("clusterName", cluster_name)?;

        let request = self.client.new_request_with_body(
            Method::PATCH,
            &cluster_path(group_id, cluster_name),
            cluster,
        )?;
        self.client.send(ctx, request).await
    }

    /// Deletes a cluster.
    pub async fn delete(
        &self,
        ctx: &Context,
        group_id: &str,
        cluster_name: &str,
    ) -> Result<Response, Error> {
        require("groupId", group_id)?;
        require("clusterName", cluster_name)?;

        let request = self
            .client
            .new_request(Method::DELETE, &cluster_path(group_id, cluster_name))?;
        self.client.send_and_discard(ctx, request).await
    }
}
