use reqwest::Method;

use crate::{
    client::{Client, Response, set_options},
    context::Context,
    error::Error,
    http::HttpClient,
    models::{AcknowledgeRequest, Alert, AlertsListOptions, Paginated},
    services::{escape, require},
};

/// Endpoints reading and acknowledging project alerts.
pub struct AlertsService<'a, H> {
    client: &'a Client<H>,
}

impl<H> Client<H> {
    pub fn alerts(&self) -> AlertsService<'_, H> {
        AlertsService { client: self }
    }
}

fn alerts_path(group_id: &str) -> String {
    format!("groups/{}/alerts", escape(group_id))
}

impl<H: HttpClient> AlertsService<'_, H> {
    /// Lists the alerts of a project, optionally filtered by status.
    pub async fn list(
        &self,
        ctx: &Context,
        group_id: &str,
        options: Option<&AlertsListOptions>,
    ) -> Result<(Paginated<Alert>, Response), Error> {
        require("groupId", group_id)?;

        let path = set_options(&alerts_path(group_id), options)?;
        let request = self.client.new_request(Method::GET, &path)?;
        self.client.send(ctx, request).await
    }

    pub async fn get(
        &self,
        ctx: &Context,
        group_id: &str,
        alert_id: &str,
    ) -> Result<(Alert, Response), Error> {
        require("groupId", group_id)?;
        require("alertID", alert_id)?;

        let path = format!("{}/{}", alerts_path(group_id), escape(alert_id));
        let request = self.client.new_request(Method::GET, &path)?;
        self.client.send(ctx, request).await
    }

    /// Acknowledges an alert, or unacknowledges it when no date is given.
    pub async fn acknowledge(
        &self,
        ctx: &Context,
        group_id: &str,
        alert_id: &str,
        acknowledge: &AcknowledgeRequest,
    ) -> Result<(Alert, Response), Error> {
        require("groupId", group_id)?;
        require("alertID", alert_id)?;

        let path = format!("{}/{}", alerts_path(group_id), escape(alert_id));
        let request = self
            .client
            .new_request_with_body(Method::PATCH, &path, acknowledge)?;
        self.client.send(ctx, request).await
    }
}
