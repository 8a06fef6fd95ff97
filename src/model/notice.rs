use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Publication state of a notice, derived at read time and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum NoticeStatus {
    Scheduled,
    Active,
    Expired,
}

impl NoticeStatus {
    /// Derives the status from the publish timestamp and optional expiry date.
    ///
    /// A notice is Scheduled until its publish time, Active afterwards, and
    /// Expired once `expires_on` is strictly in the past.
    pub fn derive(
        publish_at: NaiveDateTime,
        expires_on: Option<NaiveDate>,
        now: NaiveDateTime,
    ) -> Self {
        if let Some(expiry) = expires_on {
            if expiry < now.date() {
                return NoticeStatus::Expired;
            }
        }

        if publish_at > now {
            NoticeStatus::Scheduled
        } else {
            NoticeStatus::Active
        }
    }
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct NoticeDto {
    pub id: i32,
    pub title: String,
    /// Rich-text HTML body
    pub description: String,
    pub publish_at: NaiveDateTime,
    pub expires_on: Option<NaiveDate>,
    pub posted_by: Option<String>,
    pub audience: Option<String>,
    pub attachment_url: Option<String>,
    /// Derived from publish/expiry timestamps at response time
    pub status: NoticeStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NoticeRequest {
    pub title: String,
    pub description: String,
    pub publish_at: NaiveDateTime,
    #[serde(default)]
    pub expires_on: Option<NaiveDate>,
    #[serde(default)]
    pub posted_by: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub attachment_url: Option<String>,
}

#[cfg(test)]
mod tests {
    mod derive {
        use chrono::{Duration, NaiveDate, Utc};

        use crate::model::notice::NoticeStatus;

        /// A publish time in the future derives Scheduled
        #[test]
        fn future_publish_is_scheduled() {
            let now = Utc::now().naive_utc();
            let publish_at = now + Duration::hours(1);

            let status = NoticeStatus::derive(publish_at, None, now);

            assert_eq!(status, NoticeStatus::Scheduled);
        }

        /// A past publish time with no expiry derives Active
        #[test]
        fn past_publish_without_expiry_is_active() {
            let now = Utc::now().naive_utc();
            let publish_at = now - Duration::hours(1);

            let status = NoticeStatus::derive(publish_at, None, now);

            assert_eq!(status, NoticeStatus::Active);
        }

        /// A past publish time with a future expiry derives Active
        #[test]
        fn future_expiry_is_active() {
            let now = Utc::now().naive_utc();
            let publish_at = now - Duration::days(1);
            let expires_on = Some(now.date() + Duration::days(3));

            let status = NoticeStatus::derive(publish_at, expires_on, now);

            assert_eq!(status, NoticeStatus::Active);
        }

        /// An expiry date in the past derives Expired regardless of publish time
        #[test]
        fn past_expiry_is_expired() {
            let now = Utc::now().naive_utc();
            let publish_at = now - Duration::days(10);
            let expires_on = Some(now.date() - Duration::days(1));

            let status = NoticeStatus::derive(publish_at, expires_on, now);

            assert_eq!(status, NoticeStatus::Expired);
        }

        /// An expiry date of today is still Active, expiry is end-of-day
        #[test]
        fn expiry_today_is_still_active() {
            let now = NaiveDate::from_ymd_opt(2026, 3, 10)
                .unwrap()
                .and_hms_opt(15, 0, 0)
                .unwrap();
            let publish_at = now - chrono::Duration::days(2);
            let expires_on = Some(now.date());

            let status = NoticeStatus::derive(publish_at, expires_on, now);

            assert_eq!(status, NoticeStatus::Active);
        }
    }
}
