use super::Job;

/// Job list for the playing-card set: the card back plus the four aces,
/// served from the `hayeah/playing-cards-assets` raw GitHub tree. These
/// sources have no mirror, so the jobs carry no fallback URL.
pub fn jobs() -> Vec<Job> {
    const BASE: &str = "https://raw.githubusercontent.com/hayeah/playing-cards-assets/master/png";

    [
        ("back.png", "card-back.png"),
        ("ace_of_spades.png", "card-spades-ace.png"),
        ("ace_of_hearts.png", "card-hearts-ace.png"),
        ("ace_of_diamonds.png", "card-diamonds-ace.png"),
        ("ace_of_clubs.png", "card-clubs-ace.png"),
    ]
    .into_iter()
    .map(|(remote, local)| Job {
        url: format!("{}/{}", BASE, remote),
        filename: local.to_string(),
        fallback_url: None,
    })
    .collect()
}
