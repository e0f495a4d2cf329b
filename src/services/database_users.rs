use reqwest::Method;

use crate::{
    client::{Client, Response, set_options},
    context::Context,
    error::Error,
    http::HttpClient,
    models::{DatabaseUser, ListOptions, Paginated},
    services::{escape, require},
};

/// Endpoints managing the database users of a project.
pub struct DatabaseUsersService<'a, H> {
    client: &'a Client<H>,
}

impl<H> Client<H> {
    pub fn database_users(&self) -> DatabaseUsersService<'_, H> {
        DatabaseUsersService { client: self }
    }
}

fn users_path(group_id: &str) -> String {
    format!("groups/{}/databaseUsers", escape(group_id))
}

fn user_path(group_id: &str, database_name: &str, username: &str) -> String {
    format!(
        "{}/{}/{}",
        users_path(group_id),
        escape(database_name),
        escape(username)
    )
}

impl<H: HttpClient> DatabaseUsersService<'_, H> {
    pub async fn list(
        &self,
        ctx: &Context,
        group_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<DatabaseUser>, Response), Error> {
        require("groupId", group_id)?;

        let path = set_options(&users_path(group_id), options)?;
        let request = self.client.new_request(Method::GET, &path)?;
        let (page, response) = self
            .client
            .send::<Paginated<DatabaseUser>>(ctx, request)
            .await?;

        Ok((page.results, response))
    }

    /// Gets a user by its authentication database and name.
    pub async fn get(
        &self,
        ctx: &Context,
        group_id: &str,
        database_name: &str,
        username: &str,
    ) -> Result<(DatabaseUser, Response), Error> {
        require("groupId", group_id)?;
        require("databaseName", database_name)?;
        require("username", username)?;

        let path = user_path(group_id, database_name, username);
        let request = self.client.new_request(Method::GET, &path)?;
        self.client.send(ctx, request).await
    }

    pub async fn create(
        &self,
        ctx: &Context,
        group_id: &str,
        user: &DatabaseUser,
    ) -> Result<(DatabaseUser, Response), Error> {
        require("groupId", group_id)?;

        let request = self
            .client
            .new_request_with_body(Method::POST, &users_path(group_id), user)?;
        self.client.send(ctx, request).await
    }

    /// Modifies a user. The authentication database is taken from `user`.
    pub async fn update(
        &self,
        ctx: &Context,
        group_id: &str,
        username: &str,
        user: &DatabaseUser,
    ) -> Result<(DatabaseUser, Response), Error> {
        require("groupId", group_id)?;
        require("username", username)?;
        require("databaseName", &user.database_name)?;

        let path = user_path(group_id, &user.database_name, username);
        let request = self
            .client
            .new_request_with_body(Method::PATCH, &path, user)?;
        self.client.send(ctx, request).await
    }

    pub async fn delete(
        &self,
        ctx: &Context,
        group_id: &str,
        database_name: &str,
        username: &str,
    ) -> Result<Response, Error> {
        require("groupId", group_id)?;
        require("databaseName", database_name)?;
        require("username", username)?;

        let path = user_path(group_id, database_name, username);
        let request = self.client.new_request(Method::DELETE, &path)?;
        self.client.send_and_discard(ctx, request).await
    }
}
