//! Tour construction and improvement heuristics.
//!
//! Crew tours stay small (≤ ~15 stops per team), so a nearest-neighbor
//! start plus bounded 2-opt passes is plenty. Every function here preserves
//! the permutation contract: the output visits each task index exactly once.

use crate::types::{Priority, Task};

/// Builds an initial tour greedily: start at index 0, always step to the
/// closest unvisited task. Ties go to the lowest index.
///
/// Returns a Hamiltonian path (no closing leg back to the start).
pub fn nearest_neighbor(matrix: &[Vec<f64>]) -> Vec<usize> {
    let n = matrix.len();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut route = Vec::with_capacity(n);
    route.push(0);
    visited[0] = true;

    for _ in 1..n {
        let current = route[route.len() - 1];
        let mut nearest: Option<(usize, f64)> = None;

        for j in 0..n {
            if visited[j] {
                continue;
            }
            let dist = matrix[current][j];
            if nearest.map_or(true, |(_, best)| dist < best) {
                nearest = Some((j, dist));
            }
        }

        if let Some((j, _)) = nearest {
            route.push(j);
            visited[j] = true;
        }
    }

    route
}

/// 2-opt local search: reverse tour segments whose endpoints' edges cross.
///
/// Runs at most `max_passes` full passes over all segment pairs and stops
/// early once a pass makes no improvement. Acceptance is strict inequality,
/// so equal-cost segments never oscillate. The move cost counts a closing
/// edge back to the tour start when the segment ends at the last stop.
pub fn two_opt(mut route: Vec<usize>, matrix: &[Vec<f64>], max_passes: usize) -> Vec<usize> {
    let n = route.len();
    if n < 3 {
        return route;
    }

    for _ in 0..max_passes {
        let mut improved = false;

        for i in 1..n - 1 {
            for j in i + 1..n {
                let next = if j == n - 1 { 0 } else { j + 1 };

                let current_dist =
                    matrix[route[i - 1]][route[i]] + matrix[route[j]][route[next]];
                let new_dist =
                    matrix[route[i - 1]][route[j]] + matrix[route[i]][route[next]];

                if new_dist < current_dist {
                    route[i..=j].reverse();
                    improved = true;
                }
            }
        }

        if !improved {
            break;
        }
    }

    route
}

/// Pulls high-priority stops into the leading stretch of the tour.
///
/// The k-th high-priority stop (scanning left to right) gets the target
/// position `min(k + 1, floor(n * front_fraction))` and is spliced forward
/// only when it currently sits behind that target. Urgency beats geometry:
/// a flooding-risk drain is visited early even if that lengthens the tour.
pub fn priority_adjustment(route: Vec<usize>, tasks: &[Task], front_fraction: f64) -> Vec<usize> {
    let mut adjusted = route;
    let n = adjusted.len();

    let high_positions: Vec<usize> = adjusted
        .iter()
        .enumerate()
        .filter(|&(_, &task_index)| tasks[task_index].priority == Priority::High)
        .map(|(position, _)| position)
        .collect();

    let front_cap = (n as f64 * front_fraction).floor() as usize;

    for (k, &position) in high_positions.iter().enumerate() {
        let target = (k + 1).min(front_cap);
        if position > target {
            let task_index = adjusted.remove(position);
            adjusted.insert(target, task_index);
        }
    }

    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskStatus;

    fn task_with_priority(id: &str, priority: Priority) -> Task {
        Task {
            id: id.to_string(),
            device_id: id.to_string(),
            priority,
            status: TaskStatus::Pending,
            assigned_team: "crew-1".to_string(),
            estimated_minutes: 30,
            route_order: 0,
            created_at: 0,
        }
    }

    fn assert_permutation(route: &[usize], n: usize) {
        assert_eq!(route.len(), n);
        let mut seen = vec![false; n];
        for &i in route {
            assert!(!seen[i], "index {} appears twice", i);
            seen[i] = true;
        }
    }

    #[test]
    fn test_nearest_neighbor_empty() {
        let matrix: Vec<Vec<f64>> = Vec::new();
        assert!(nearest_neighbor(&matrix).is_empty());
    }

    #[test]
    fn test_nearest_neighbor_single() {
        let matrix = vec![vec![0.0]];
        assert_eq!(nearest_neighbor(&matrix), vec![0]);
    }

    #[test]
    fn test_nearest_neighbor_picks_closest() {
        // From 0: node 2 (1.0) is closer than node 1 (5.0).
        let matrix = vec![
            vec![0.0, 5.0, 1.0],
            vec![5.0, 0.0, 2.0],
            vec![1.0, 2.0, 0.0],
        ];
        assert_eq!(nearest_neighbor(&matrix), vec![0, 2, 1]);
    }

    #[test]
    fn test_nearest_neighbor_tie_goes_to_lowest_index() {
        let matrix = vec![
            vec![0.0, 3.0, 3.0],
            vec![3.0, 0.0, 1.0],
            vec![3.0, 1.0, 0.0],
        ];
        assert_eq!(nearest_neighbor(&matrix), vec![0, 1, 2]);
    }

    #[test]
    fn test_two_opt_uncrosses_edges() {
        // Four points on a square; tour 0-2-1-3 crosses, 0-1-2-3 doesn't.
        // Distances: adjacent corners 1.0, diagonal sqrt(2).
        let d = 2.0_f64.sqrt();
        let matrix = vec![
            vec![0.0, 1.0, d, 1.0],
            vec![1.0, 0.0, 1.0, d],
            vec![d, 1.0, 0.0, 1.0],
            vec![1.0, d, 1.0, 0.0],
        ];
        let crossed = vec![0, 2, 1, 3];
        let improved = two_opt(crossed, &matrix, 100);

        assert_permutation(&improved, 4);
        let tour_len = |r: &[usize]| -> f64 { r.windows(2).map(|w| matrix[w[0]][w[1]]).sum() };
        assert!(tour_len(&improved) <= tour_len(&[0, 2, 1, 3]));
    }

    #[test]
    fn test_two_opt_keeps_short_routes() {
        let matrix = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        assert_eq!(two_opt(vec![0, 1], &matrix, 100), vec![0, 1]);
    }

    #[test]
    fn test_two_opt_no_swap_on_ties() {
        // All edges equal: strict inequality means nothing moves.
        let matrix = vec![
            vec![0.0, 1.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0, 1.0],
            vec![1.0, 1.0, 0.0, 1.0],
            vec![1.0, 1.0, 1.0, 0.0],
        ];
        assert_eq!(two_opt(vec![0, 3, 1, 2], &matrix, 100), vec![0, 3, 1, 2]);
    }

    #[test]
    fn test_priority_adjustment_no_high_priority_is_identity() {
        let tasks: Vec<Task> = (0..5)
            .map(|i| task_with_priority(&format!("t{}", i), Priority::Medium))
            .collect();
        let route = vec![2, 0, 4, 1, 3];
        assert_eq!(priority_adjustment(route.clone(), &tasks, 0.3), route);
    }

    #[test]
    fn test_priority_adjustment_moves_late_high_priority_forward() {
        // Ten tasks, the one at tour position 9 is high priority.
        let mut tasks: Vec<Task> = (0..10)
            .map(|i| task_with_priority(&format!("t{}", i), Priority::Medium))
            .collect();
        tasks[9].priority = Priority::High;

        let route: Vec<usize> = (0..10).collect();
        let adjusted = priority_adjustment(route, &tasks, 0.3);

        assert_permutation(&adjusted, 10);
        let position = adjusted.iter().position(|&i| i == 9).unwrap();
        assert!(position <= 1, "high priority should move to front, got {}", position);
    }

    #[test]
    fn test_priority_adjustment_front_stays_put() {
        let mut tasks: Vec<Task> = (0..10)
            .map(|i| task_with_priority(&format!("t{}", i), Priority::Medium))
            .collect();
        tasks[0].priority = Priority::High;

        let route: Vec<usize> = (0..10).collect();
        assert_eq!(priority_adjustment(route.clone(), &tasks, 0.3), route);
    }

    #[test]
    fn test_priority_adjustment_all_high_stays_permutation() {
        let tasks: Vec<Task> = (0..6)
            .map(|i| task_with_priority(&format!("t{}", i), Priority::High))
            .collect();
        let adjusted = priority_adjustment(vec![5, 4, 3, 2, 1, 0], &tasks, 0.3);
        assert_permutation(&adjusted, 6);
    }

    #[test]
    fn test_priority_adjustment_compacts_into_front_window() {
        // Two high-priority tasks late in a 10-stop tour end up within
        // max(k, floor(n*0.3)) = 3 positions of the front.
        let mut tasks: Vec<Task> = (0..10)
            .map(|i| task_with_priority(&format!("t{}", i), Priority::Medium))
            .collect();
        tasks[7].priority = Priority::High;
        tasks[8].priority = Priority::High;

        let route: Vec<usize> = (0..10).collect();
        let adjusted = priority_adjustment(route, &tasks, 0.3);

        assert_permutation(&adjusted, 10);
        for high in [7usize, 8] {
            let position = adjusted.iter().position(|&i| i == high).unwrap();
            assert!(position <= 3, "task {} at position {}", high, position);
        }
    }
}
