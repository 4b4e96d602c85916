use rocket::http::Status;
use rocket::request::{self, FromRequest, Outcome, Request};

use atheneum_result::{create_error, Error};

use crate::{Database, User};

/// Resolve the acting user from the identity supplied by the
/// upstream authentication layer.
#[rocket::async_trait]
impl<'r> FromRequest<'r> for User {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let user: &Option<User> = request
            .local_cache_async(async {
                let db = request.rocket().state::<Database>().expect("`Database`");

                let header_user_id = request
                    .headers()
                    .get("x-user-id")
                    .next()
                    .map(|x| x.to_string());

                if let Some(user_id) = header_user_id {
                    if let Ok(user) = db.fetch_user(&user_id).await {
                        return Some(user);
                    }
                }

                None
            })
            .await;

        if let Some(user) = user {
            Outcome::Success(user.clone())
        } else {
            Outcome::Error((Status::Unauthorized, create_error!(InvalidSession)))
        }
    }
}
