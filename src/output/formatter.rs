use crate::github::types::PullRequestSummary;

/// Link to a pull request built from the repository identifier and number
pub fn pull_request_link(repo_id: &str, number: u64) -> String {
    format!("https://github.com/{}/pull/{}", repo_id, number)
}

/// Build the reminder message for one repository.
///
/// The layout is fixed (Telegram HTML markup, emoji banners). When
/// `stale_requests` is empty a single confirmation line follows the
/// repository line; otherwise a banner and one numbered line per request,
/// numbered from 1. Titles are neither truncated nor escaped.
pub fn format_report(
    repo_id: &str,
    staleness_days: u32,
    repo_url: &str,
    stale_requests: &[PullRequestSummary],
) -> String {
    let mut message = format!("🕔 Pull Requests Reminder: last {} days \n", staleness_days);
    message.push_str(&format!(
        "💻 Repository: <a href=\"{}\">{}</a>\n",
        repo_url, repo_id
    ));

    if stale_requests.is_empty() {
        message.push_str("\n✅ There are no stale Pull Requests");
        return message;
    }

    message.push_str("\n🚨 **Pending Pull Requests:** 🚨 \n\n\n");
    for (idx, pr) in stale_requests.iter().enumerate() {
        message.push_str(&format!(
            "{}. ⚠️{} - <a href=\"{}\">#{}</a>\n",
            idx + 1,
            pr.title,
            pull_request_link(repo_id, pr.number),
            pr.number
        ));
    }

    message
}
