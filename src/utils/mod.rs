use actix_web::{web, FromRequest};
use chrono::NaiveDate;
use futures_util::future::LocalBoxFuture;
use validator::{Validate, ValidationError};

use crate::{api::error, constants::MIN_RELEASE_DATE};

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Value cannot be blank".into()));
    }
    Ok(())
}

pub fn validate_login(login: &str) -> Result<(), ValidationError> {
    if login.is_empty() || login.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("login")
            .with_message("Login cannot be empty or contain whitespace".into()));
    }
    Ok(())
}

pub fn validate_release_date(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date < MIN_RELEASE_DATE {
        return Err(ValidationError::new("release_date")
            .with_message(format!("Release date cannot be earlier than {MIN_RELEASE_DATE}").into()));
    }
    Ok(())
}

/// Birthdays must be strictly in the past; today is rejected.
pub fn validate_birthday(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date >= chrono::Local::now().date_naive() {
        return Err(ValidationError::new("birthday")
            .with_message("Birthday must be in the past".into()));
    }
    Ok(())
}

pub struct ValidatedJson<T>(pub T);

impl<T> FromRequest for ValidatedJson<T>
where
    T: Validate + serde::de::DeserializeOwned + 'static,
{
    type Error = error::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        let fut = web::Json::<T>::from_request(req, payload);

        Box::pin(async move {
            let json = fut.await.map_err(|e| error::Error::bad_request(e.to_string()))?;
            let model = json.into_inner();
            model.validate().map_err(|e| error::Error::bad_request(e.to_string()))?;
            Ok(ValidatedJson(model))
        })
    }
}

pub struct ValidatedQuery<T>(pub T);

impl<T> FromRequest for ValidatedQuery<T>
where
    T: Validate + serde::de::DeserializeOwned + 'static,
{
    type Error = error::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        let fut = web::Query::<T>::from_request(req, payload);

        Box::pin(async move {
            let query = fut.await.map_err(|e| error::Error::bad_request(e.to_string()))?;
            query.validate().map_err(|e| error::Error::bad_request(e.to_string()))?;
            Ok(ValidatedQuery(query.into_inner()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_rejects_whitespace() {
        assert!(validate_login("bad login").is_err());
        assert!(validate_login("").is_err());
        assert!(validate_login("user_123").is_ok());
        assert!(validate_login("!_*").is_ok());
    }

    #[test]
    fn release_date_accepts_minimum() {
        assert!(validate_release_date(&MIN_RELEASE_DATE).is_ok());
        let day_before = MIN_RELEASE_DATE.pred_opt().unwrap();
        assert!(validate_release_date(&day_before).is_err());
    }

    #[test]
    fn birthday_rejects_today_and_future() {
        let today = chrono::Local::now().date_naive();
        assert!(validate_birthday(&today).is_err());
        assert!(validate_birthday(&today.succ_opt().unwrap()).is_err());
        assert!(validate_birthday(&NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()).is_ok());
    }

    #[test]
    fn blank_is_rejected() {
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("Valid Title").is_ok());
    }
}
