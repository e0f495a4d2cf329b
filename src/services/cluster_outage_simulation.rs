use reqwest::Method;

use crate::{
    client::{Client, Response},
    context::Context,
    error::Error,
    http::HttpClient,
    models::{ClusterOutageSimulation, ClusterOutageSimulationRequest},
    services::{escape, require},
};

/// Endpoints simulating regional outages on a cluster.
pub struct ClusterOutageSimulationService<'a, H> {
    client: &'a Client<H>,
}

impl<H> Client<H> {
    pub fn cluster_outage_simulation(&self) -> ClusterOutageSimulationService<'_, H> {
        ClusterOutageSimulationService { client: self }
    }
}

fn simulation_path(group_id: &str, cluster_name: &str) -> String {
    format!(
        "groups/{}/clusters/{}/outageSimulation",
        escape(group_id),
        escape(cluster_name)
    )
}

impl<H: HttpClient> ClusterOutageSimulationService<'_, H> {
    /// Starts an outage simulation for the regions selected by `request`.
    pub async fn start(
        &self,
        ctx: &Context,
        group_id: &str,
        cluster_name: &str,
        request: &ClusterOutageSimulationRequest,
    ) -> Result<(ClusterOutageSimulation, Response), Error> {
        require("groupId", group_id)?;
        require("clusterName", cluster_name)?;

        let request = self.client.new_request_with_body(
            Method::POST,
            &simulation_path(group_id, cluster_name),
            request,
        )?;
        self.client.send(ctx, request).await
    }

    pub async fn get(
        &self,
        ctx: &Context,
        group_id: &str,
        cluster_name: &str,
    ) -> Result<(ClusterOutageSimulation, Response), Error> {
        require("groupId", group_id)?;
        require("clusterName", cluster_name)?;

        let request = self
            .client
            .new_request(Method::GET, &simulation_path(group_id, cluster_name))?;
        self.client.send(ctx, request).await
    }

    /// Ends the running simulation. The returned record is in a recovering state.
    pub async fn end(
        &self,
        ctx: &Context,
        group_id: &str,
        cluster_name: &str,
    ) -> Result<(ClusterOutageSimulation, Response), Error> {
        require("groupId", group_id)?;
        require("clusterName", cluster_name)?;

        let request = self
            .client
            .new_request(Method::DELETE, &simulation_path(group_id, cluster_name))?;
        self.client.send(ctx, request).await
    }
}
