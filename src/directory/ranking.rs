use std::cmp::Ordering;

use crate::models::Worker;

/// Ranking key shared by every listing: rating descending, then verified
/// before unverified.
pub fn compare(a: &Worker, b: &Worker) -> Ordering {
    b.rating
        .total_cmp(&a.rating)
        .then_with(|| b.verified.cmp(&a.verified))
}

/// Sort in place by the ranking key. `sort_by` is stable, so ties keep
/// their collection order.
pub fn rank(workers: &mut [&Worker]) {
    workers.sort_by(|a, b| compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker(id: u32, rating: f64, verified: bool) -> Worker {
        Worker {
            id,
            name: format!("worker-{id}"),
            location: "Lagos".into(),
            availability: "Weekdays".into(),
            rating,
            hourly_rate: 1000.0,
            skills: vec!["Cleaner".into()],
            experience_years: 1,
            description: String::new(),
            job_type: "Cleaner".into(),
            contact: String::new(),
            verified,
        }
    }

    fn ranked_ids(workers: &[Worker]) -> Vec<u32> {
        let mut refs: Vec<&Worker> = workers.iter().collect();
        rank(&mut refs);
        refs.iter().map(|w| w.id).collect()
    }

    #[test]
    fn test_higher_rating_first() {
        let workers = vec![worker(1, 3.9, true), worker(2, 4.7, false), worker(3, 4.1, true)];
        assert_eq!(ranked_ids(&workers), vec![2, 3, 1]);
    }

    #[test]
    fn test_verified_breaks_rating_ties() {
        let workers = vec![worker(1, 4.5, false), worker(2, 4.5, true)];
        assert_eq!(ranked_ids(&workers), vec![2, 1]);
    }

    #[test]
    fn test_full_ties_keep_collection_order() {
        let workers = vec![
            worker(5, 4.0, true),
            worker(2, 4.0, true),
            worker(9, 4.0, true),
        ];
        assert_eq!(ranked_ids(&workers), vec![5, 2, 9]);
    }
}
