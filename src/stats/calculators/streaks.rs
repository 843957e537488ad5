use crate::stats::models::PlayerGameResult;

/// Returns `(current, best)` win streaks.
///
/// Results are ordered by `played_at`, most recent first. The current streak
/// counts consecutive wins from the latest game back; shared victories count
/// as wins.
pub fn win_streaks(results: &[PlayerGameResult]) -> (u32, u32) {
    let mut ordered: Vec<&PlayerGameResult> = results.iter().collect();
    ordered.sort_by(|a, b| b.played_at.cmp(&a.played_at));

    let mut current = 0;
    let mut best = 0;
    let mut run = 0;
    let mut broken = false;

    for result in ordered {
        if result.is_winner {
            run += 1;
            if !broken {
                current = run;
            }
            best = best.max(run);
        } else {
            broken = true;
            run = 0;
        }
    }

    (current, best)
}
