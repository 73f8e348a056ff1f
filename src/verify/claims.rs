use crate::claims::Claim;
use crate::verify::{Status, VerificationSession};
use serde::Serialize;

/// Verification outcome for one numeric claim. Never red.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimCheck {
    pub claim_id: String,
    pub status: Status,
    pub notes: String,
}

/// Spellings of a claim number worth looking for in evidence text
pub fn number_variants(number: &str) -> Vec<String> {
    let raw = number.trim();
    let without_commas = raw.replace(',', "");
    let compact = without_commas.replace(' ', "");

    let mut variants = vec![raw.to_string()];
    for variant in [without_commas, compact] {
        if !variants.contains(&variant) {
            variants.push(variant);
        }
    }
    if raw.ends_with('%') {
        let spaced = raw.replace('%', " %");
        if !variants.contains(&spaced) {
            variants.push(spaced);
        }
    }
    variants
}

/// True if any spelling of `number` occurs verbatim in `text`
pub fn number_in_text(number: &str, text: &str) -> bool {
    number_variants(number)
        .iter()
        .any(|variant| !variant.is_empty() && text.contains(variant.as_str()))
}

/// Looks for each numeric claim's numbers in its linked pages.
///
/// Must run after [`check_links`](crate::verify::check_links): red links
/// are skipped without fetching, and pages already fetched come from the
/// session cache.
pub async fn check_numeric_claims(
    session: &mut VerificationSession,
    claims: &[Claim],
) -> Vec<ClaimCheck> {
    let mut checks = Vec::with_capacity(claims.len());

    for claim in claims {
        if claim.links.is_empty() {
            checks.push(ClaimCheck {
                claim_id: claim.claim_id.clone(),
                status: Status::Yellow,
                notes: "No linked source near this numeric claim".to_string(),
            });
            continue;
        }

        let mut status = Status::Yellow;
        let mut notes = "No matching number found in linked sources";

        for link in &claim.links {
            let link_status = session.links.get(&link.url).map(|check| check.status);
            if link_status == Some(Status::Red) {
                notes = "Linked source appears irrelevant or blocked";
                continue;
            }

            let text = match session.page_text(&link.url).await {
                Ok(text) => text,
                Err(_) => {
                    notes = "Linked source could not be fetched";
                    continue;
                }
            };

            if claim.numbers().iter().any(|number| number_in_text(number, text)) {
                status = Status::Green;
                notes = "Number appears in linked source";
                break;
            }
        }

        ::log::debug!("Claim {} -> {:?} ({})", claim.claim_id, status, notes);
        checks.push(ClaimCheck {
            claim_id: claim.claim_id.clone(),
            status,
            notes: notes.to_string(),
        });
    }

    checks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::extract_numeric_claims;
    use crate::parsers::{LinkRef, Segment};
    use crate::verify::check_links;
    use crate::verify::test_support::{session, session_with_timeout};
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn claims_for(text: &str, urls: &[&str]) -> (Vec<Segment>, Vec<Claim>) {
        let segments = vec![Segment::new(
            text.to_string(),
            urls.iter().map(|url| LinkRef::new(*url, "source")).collect(),
        )];
        let claims = extract_numeric_claims(&segments);
        (segments, claims)
    }

    async fn serve(server: &MockServer, route: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[test]
    fn test_number_normalization() {
        assert!(number_in_text("1,234", "total of 1234 units"));
        assert!(number_in_text("25%", "a share of 25 % overall"));
        assert!(number_in_text("₹1,234 crore", "spent ₹1234crore"));
        assert!(!number_in_text("1,235", "total of 1234 units"));
        assert_eq!(number_variants("42"), vec!["42"]);
    }

    #[tokio::test]
    async fn test_claim_without_links_is_yellow() {
        let mut session = session();
        let (_, claims) = claims_for("Sales were 500 units.", &[]);

        let checks = check_numeric_claims(&mut session, &claims).await;
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].status, Status::Yellow);
        assert_eq!(checks[0].notes, "No linked source near this numeric claim");
    }

    #[tokio::test]
    async fn test_number_found_in_linked_page() {
        let server = MockServer::start().await;
        serve(
            &server,
            "/report",
            "<p>Annual report: sales of 1234 units across regions</p>",
        )
        .await;

        let url = format!("{}/report", server.uri());
        let (segments, claims) = claims_for("Regional sales reached 1,234 units.", &[url.as_str()]);

        let mut session = session();
        check_links(&mut session, &segments).await;
        let checks = check_numeric_claims(&mut session, &claims).await;

        // Shared cache: the mock expects exactly one request
        assert_eq!(checks[0].status, Status::Green);
        assert_eq!(checks[0].notes, "Number appears in linked source");
    }

    #[tokio::test]
    async fn test_red_link_is_skipped_and_next_link_wins() {
        let server = MockServer::start().await;
        serve(&server, "/data", "<p>Exports stood at 42 bn this year</p>").await;

        let data = format!("{}/data", server.uri());
        let (segments, claims) = claims_for(
            "Exports stood at 42 bn.",
            &["https://twitter.com/someone/status/1", data.as_str()],
        );

        let mut session = session();
        check_links(&mut session, &segments).await;
        let checks = check_numeric_claims(&mut session, &claims).await;
        assert_eq!(checks[0].status, Status::Green);
    }

    #[tokio::test]
    async fn test_only_red_links_keep_irrelevant_note() {
        let mut session = session();
        let (segments, claims) =
            claims_for("Users hit 300 million.", &["https://www.facebook.com/page"]);

        check_links(&mut session, &segments).await;
        let checks = check_numeric_claims(&mut session, &claims).await;
        assert_eq!(checks[0].status, Status::Yellow);
        assert_eq!(checks[0].notes, "Linked source appears irrelevant or blocked");
    }

    #[tokio::test]
    async fn test_no_match_uses_default_note() {
        let server = MockServer::start().await;
        serve(&server, "/page", "<p>Users figures were not disclosed</p>").await;

        let url = format!("{}/page", server.uri());
        let (segments, claims) = claims_for("Users hit 300 million.", &[url.as_str()]);

        let mut session = session();
        check_links(&mut session, &segments).await;
        let checks = check_numeric_claims(&mut session, &claims).await;
        assert_eq!(checks[0].status, Status::Yellow);
        assert_eq!(checks[0].notes, "No matching number found in linked sources");
    }

    #[tokio::test]
    async fn test_failed_fetch_note_survives_later_unmatched_link() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bad"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;
        serve(&server, "/ok", "<p>Users figures were not disclosed</p>").await;

        let bad = format!("{}/bad", server.uri());
        let ok = format!("{}/ok", server.uri());
        let (segments, claims) =
            claims_for("Users hit 300 million.", &[bad.as_str(), ok.as_str()]);

        let mut session = session();
        check_links(&mut session, &segments).await;
        let checks = check_numeric_claims(&mut session, &claims).await;
        assert_eq!(checks[0].status, Status::Yellow);
        assert_eq!(checks[0].notes, "Linked source could not be fetched");

        // One request per URL across both stages
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
    }

    #[tokio::test]
    async fn test_timed_out_source_leaves_claim_yellow() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<p>Users hit 300 million</p>")
                    .set_delay(Duration::from_secs(2)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let url = format!("{}/slow", server.uri());
        let (segments, claims) = claims_for("Users hit 300 million.", &[url.as_str()]);

        let mut session = session_with_timeout(Duration::from_millis(200));
        check_links(&mut session, &segments).await;
        assert_eq!(
            session.link_results().get(&url).unwrap().status,
            Status::Yellow
        );

        let checks = check_numeric_claims(&mut session, &claims).await;
        assert_eq!(checks[0].status, Status::Yellow);
        assert_eq!(checks[0].notes, "Linked source could not be fetched");
    }
}
