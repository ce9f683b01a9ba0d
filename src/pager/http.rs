use super::types::{
    GetOverridesResponse, GetScheduleResponse, GetUsersResponse, Override, User, UserRef,
};
use super::{Pager, PdSchedule};
use crate::model::{Shift, ShiftList};
use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::env;

const PD_URL: &str = "https://api.pagerduty.com";
const TOKEN_ENV_VAR: &str = "PD_TOKEN";
const OVERRIDES_DATE_FMT: &str = "%Y-%m-%d";

/// Client bloquant vers l'API du service de pagination.
///
/// Les identifiants d'utilisateurs résolus par email sont mémorisés pour la
/// durée de vie du client.
pub struct HttpPager {
    http: Client,
    base_url: Url,
    user_ids: HashMap<String, String>,
}

impl HttpPager {
    /// Construit le client à partir de `$PD_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let token = env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| anyhow!("environment variable ${TOKEN_ENV_VAR} must be set"))?;
        Self::with_base_url(PD_URL, &token)
    }

    /// Client pointé sur une autre URL de base (serveurs de test).
    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(token).context("invalid token header")?,
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.pagerduty+json;version=2"),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = Client::builder().default_headers(headers).build()?;
        let base_url = Url::parse(base_url).context("invalid base url")?;
        Ok(Self {
            http,
            base_url,
            user_ids: HashMap::new(),
        })
    }

    fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let resp = self.http.get(url.clone()).send()?;
        let status = resp.status();
        let body = resp.text()?;
        if status != StatusCode::OK {
            bail!(
                "expected 200 response for {}, got {}: {}",
                url.path(),
                status.as_u16(),
                body
            );
        }
        serde_json::from_str(&body)
            .with_context(|| format!("decoding response for {}", url.path()))
    }

    fn post<B: Serialize>(&self, url: Url, body: &B) -> Result<()> {
        let resp = self.http.post(url.clone()).json(body).send()?;
        let status = resp.status();
        if status != StatusCode::CREATED {
            let body = resp.text().unwrap_or_default();
            bail!(
                "expected 201 response for {}, got {}: {}",
                url.path(),
                status.as_u16(),
                body
            );
        }
        Ok(())
    }

    fn get_overrides(
        &self,
        schedule_id: &str,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Result<Vec<Override>> {
        let mut url = self
            .base_url
            .join(&format!("/schedules/{schedule_id}/overrides"))?;
        url.query_pairs_mut()
            .append_pair("since", &start.format(OVERRIDES_DATE_FMT).to_string())
            .append_pair("until", &end.format(OVERRIDES_DATE_FMT).to_string());
        let resp: GetOverridesResponse = self.get(url)?;
        Ok(resp.overrides)
    }

    fn get_user(&self, email: &str) -> Result<User> {
        let mut url = self.base_url.join("/users")?;
        url.query_pairs_mut().append_pair("query", email);
        let resp: GetUsersResponse = self.get(url)?;
        let [user] = <[User; 1]>::try_from(resp.users)
            .map_err(|users| anyhow!("expected one user for {email:?}, found {}", users.len()))?;
        if user.email != email {
            bail!("got user with email {:?}, expected {:?}", user.email, email);
        }
        Ok(user)
    }

    fn user_id(&mut self, email: &str) -> Result<String> {
        if let Some(id) = self.user_ids.get(email) {
            return Ok(id.clone());
        }
        let user = self.get_user(email)?;
        self.user_ids.insert(email.to_owned(), user.id.clone());
        Ok(user.id)
    }

    fn override_exists(&mut self, existing: &[Override], shift: &Shift) -> Result<bool> {
        let uid = self.user_id(&shift.email)?;
        Ok(existing.iter().any(|o| {
            o.start == shift.start && o.end == shift.end && o.user.id == uid
        }))
    }

    fn create_override(&mut self, schedule_id: &str, shift: &Shift) -> Result<()> {
        let uid = self.user_id(&shift.email)?;
        let body = Override {
            user: UserRef {
                id: uid,
                kind: "user_reference".to_owned(),
                name: String::new(),
            },
            start: shift.start,
            end: shift.end,
        };
        let url = self
            .base_url
            .join(&format!("/schedules/{schedule_id}/overrides"))?;
        self.post(url, &body)
    }
}

impl Pager for HttpPager {
    fn sync(&mut self, schedule_id: &str, shifts: &ShiftList) -> Result<()> {
        let (Some(first), Some(last)) = (shifts.first(), shifts.last()) else {
            return Ok(());
        };
        self.get_schedule(schedule_id)?;

        let existing = self.get_overrides(schedule_id, first.start, last.end)?;
        let now = Utc::now().fixed_offset();

        for shift in shifts {
            if shift.end < now {
                continue;
            }
            if self.override_exists(&existing, shift)? {
                continue;
            }
            self.create_override(schedule_id, shift)?;
        }
        Ok(())
    }

    fn get_schedule(&mut self, id: &str) -> Result<PdSchedule> {
        let url = self.base_url.join(&format!("/schedules/{id}"))?;
        let resp: GetScheduleResponse = self.get(url)?;
        Ok(resp.schedule)
    }
}
