use reqwest::Method;

use crate::{
    client::{Client, Response},
    context::Context,
    error::Error,
    http::HttpClient,
    models::Auditing,
    services::{escape, require},
};

/// Endpoints reading and changing the database auditing configuration.
pub struct AuditingService<'a, H> {
    client: &'a Client<H>,
}

impl<H> Client<H> {
    pub fn auditing(&self) -> AuditingService<'_, H> {
        AuditingService { client: self }
    }
}

fn audit_log_path(group_id: &str) -> String {
    format!("groups/{}/auditLog", escape(group_id))
}

impl<H: HttpClient> AuditingService<'_, H> {
    pub async fn get(&self, ctx: &Context, group_id: &str) -> Result<(Auditing, Response), Error> {
        require("groupId", group_id)?;

        let request = self
            .client
            .new_request(Method::GET, &audit_log_path(group_id))?;
        self.client.send(ctx, request).await
    }

    /// Changes the auditing configuration. Unset fields are left as they are.
    pub async fn configure(
        &self,
        ctx: &Context,
        group_id: &str,
        auditing: &Auditing,
    ) -> Result<(Auditing, Response), Error> {
        require("groupId", group_id)?;

        let request =
            self.client
                .new_request_with_body(Method::PATCH, &audit_log_path(group_id), auditing)?;
        self.client.send(ctx, request).await
    }
}
