use crate::domain::assignment::AssignmentMap;
use crate::domain::issue::SearchRequest;
use crate::error::AppResult;
use crate::services::IssueTrackerService;

/// Pages through every issue matching `jql` and groups the results by
/// assignee.
///
/// The cursor advances by the number of issues actually received, and the
/// loop stops once that count reaches the total reported by the latest page.
/// Any failure aborts the whole fetch; nothing gathered so far is returned.
pub async fn collect_assignments(
    tracker: &dyn IssueTrackerService,
    jql: &str,
    page_size: usize,
) -> AppResult<AssignmentMap> {
    let mut assignments = AssignmentMap::new();
    let mut retrieved = 0usize;

    loop {
        let request = SearchRequest::new(jql, retrieved, page_size);
        let page = tracker.search(&request).await?;
        let received = page.issues.len();

        tracing::debug!(
            start_at = page.start_at,
            received,
            total = page.total,
            "fetched search page"
        );

        for (index, issue) in page.issues.into_iter().enumerate() {
            let assignment = issue.normalize(retrieved + index)?;
            assignments.add(assignment.assignee, assignment.ticket);
        }

        retrieved += received;
        if retrieved >= page.total {
            break;
        }
        if received == 0 {
            tracing::warn!(
                retrieved,
                total = page.total,
                "search returned an empty page before reaching the reported total"
            );
            break;
        }
    }

    tracing::info!(
        tickets = retrieved,
        recipients = assignments.recipient_count(),
        "collected open assignments"
    );

    Ok(assignments)
}
