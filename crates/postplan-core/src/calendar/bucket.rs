//! Day bucketing - grouping posts under the calendar days they render in.

use chrono::NaiveDate;

use crate::domain::Post;

/// All posts scheduled on one calendar day, in input order.
///
/// The bucket always retains every matching post; trimming to a per-day
/// display cap is a presentation concern handled at the DTO layer.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub posts: Vec<Post>,
}

/// Group `posts` by calendar-day equality against `days`, one bucket per day
/// in day order. A post scheduled outside the rendered range lands in no
/// bucket; input order is preserved within each bucket.
pub fn bucket_by_day(posts: &[Post], days: &[NaiveDate]) -> Vec<DayBucket> {
    days.iter()
        .map(|&date| DayBucket {
            date,
            posts: posts
                .iter()
                .filter(|post| post.scheduled_day() == date)
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{ViewMode, days_in_view};
    use crate::domain::{ContentType, PostDraft, PostStatus};
    use chrono::{DateTime, TimeZone, Utc};

    fn post_at(when: DateTime<Utc>) -> Post {
        Post::new(PostDraft {
            content: format!("post at {when}"),
            platforms: vec!["instagram".to_string()],
            content_type: ContentType::Post,
            scheduled_date: when,
            status: PostStatus::Scheduled,
            hashtags: vec![],
            mentions: vec![],
        })
    }

    #[test]
    fn posts_land_in_their_scheduled_day() {
        // Week of Monday 2024-06-24
        let reference = Utc.with_ymd_and_hms(2024, 6, 24, 0, 0, 0).unwrap();
        let posts = vec![
            post_at(Utc.with_ymd_and_hms(2024, 6, 25, 10, 0, 0).unwrap()),
            post_at(Utc.with_ymd_and_hms(2024, 6, 26, 14, 30, 0).unwrap()),
        ];
        let days = days_in_view(reference, ViewMode::Week);
        let buckets = bucket_by_day(&posts, &days);

        assert_eq!(buckets.len(), 7);
        for bucket in &buckets {
            match bucket.date.to_string().as_str() {
                "2024-06-25" => assert_eq!(bucket.posts, vec![posts[0].clone()]),
                "2024-06-26" => assert_eq!(bucket.posts, vec![posts[1].clone()]),
                _ => assert!(bucket.posts.is_empty()),
            }
        }
    }

    #[test]
    fn buckets_partition_the_in_range_posts() {
        let reference = Utc.with_ymd_and_hms(2024, 6, 24, 0, 0, 0).unwrap();
        let in_range: Vec<Post> = (24..=30)
            .map(|d| post_at(Utc.with_ymd_and_hms(2024, 6, d, 12, 0, 0).unwrap()))
            .collect();
        let out_of_range = post_at(Utc.with_ymd_and_hms(2024, 7, 5, 12, 0, 0).unwrap());

        let mut posts = in_range.clone();
        posts.push(out_of_range.clone());

        let days = days_in_view(reference, ViewMode::Week);
        let buckets = bucket_by_day(&posts, &days);

        // Each post appears in exactly one bucket.
        let bucketed: Vec<Post> = buckets.iter().flat_map(|b| b.posts.clone()).collect();
        assert_eq!(bucketed.len(), in_range.len());
        for post in &in_range {
            assert_eq!(bucketed.iter().filter(|p| p.id == post.id).count(), 1);
        }
        assert!(!bucketed.iter().any(|p| p.id == out_of_range.id));
    }

    #[test]
    fn bucket_keeps_input_order() {
        let when = Utc.with_ymd_and_hms(2024, 6, 25, 9, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 6, 25, 18, 0, 0).unwrap();
        // Inserted later-in-day first; bucket order must follow insertion.
        let posts = vec![post_at(later), post_at(when)];
        let days = vec![NaiveDate::from_ymd_opt(2024, 6, 25).unwrap()];
        let buckets = bucket_by_day(&posts, &days);
        assert_eq!(buckets[0].posts[0].id, posts[0].id);
        assert_eq!(buckets[0].posts[1].id, posts[1].id);
    }
}
