//! Schedule-time validation for generated posts.

use chrono::{DateTime, Utc};
use postwright_core::GeneratedPost;
use postwright_error::{ValidationError, ValidationErrorKind};
use tracing::info;

/// Mark a post as scheduled for `when`.
///
/// Rejects any time that is not strictly in the future. The schedule is
/// recorded on the post as ISO-8601; no background delivery exists, the
/// timestamp is informational.
pub fn schedule(post: &mut GeneratedPost, when: DateTime<Utc>) -> Result<(), ValidationError> {
    if when <= Utc::now() {
        return Err(ValidationError::new(ValidationErrorKind::PastScheduleTime(
            when.to_rfc3339(),
        )));
    }
    post.scheduled_for = Some(when.to_rfc3339());
    info!(scheduled_for = %when, "post scheduled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn empty_post() -> GeneratedPost {
        GeneratedPost {
            research_summary: String::new(),
            content_angle: "General".to_string(),
            content: "body".to_string(),
            hashtags: vec![],
            image_url: None,
            sources: vec![],
            timestamp: GeneratedPost::now_millis(),
            scheduled_for: None,
        }
    }

    #[test]
    fn future_time_is_recorded_as_rfc3339() {
        let mut post = empty_post();
        let when = Utc::now() + Duration::hours(2);
        schedule(&mut post, when).unwrap();
        assert_eq!(post.scheduled_for.as_deref(), Some(when.to_rfc3339().as_str()));
    }

    #[test]
    fn past_time_is_rejected() {
        let mut post = empty_post();
        let when = Utc::now() - Duration::minutes(1);
        assert!(schedule(&mut post, when).is_err());
        assert_eq!(post.scheduled_for, None);
    }

    #[test]
    fn rescheduling_replaces_the_previous_time() {
        let mut post = empty_post();
        schedule(&mut post, Utc::now() + Duration::hours(1)).unwrap();
        let later = Utc::now() + Duration::hours(3);
        schedule(&mut post, later).unwrap();
        assert_eq!(post.scheduled_for.as_deref(), Some(later.to_rfc3339().as_str()));
    }
}
