use super::Job;

/// Job list for the ocean-animal set. The openclipart.org downloads are
/// flaky, so every job carries a freesvg.org mirror as fallback.
pub fn jobs() -> Vec<Job> {
    [
        (
            "https://openclipart.org/download/282614/1495146125.svg",
            "ocean-shark.png",
            "https://freesvg.org/img/1526017993.png",
        ),
        (
            "https://openclipart.org/download/226095/Cartoon-Octopus.svg",
            "ocean-octopus.png",
            "https://freesvg.org/img/Octopus-by-Rones.png",
        ),
        (
            "https://openclipart.org/download/285200/1502384081.svg",
            "ocean-turtle.png",
            "https://freesvg.org/img/1534454216.png",
        ),
        (
            "https://openclipart.org/download/169312/jellyfish.svg",
            "ocean-jellyfish.png",
            "https://freesvg.org/img/1538063579.png",
        ),
        (
            "https://openclipart.org/download/304307/1526017993.svg",
            "ocean-clownfish.png",
            "https://freesvg.org/img/clownfish.png",
        ),
        (
            "https://openclipart.org/download/325242/dolphin.svg",
            "ocean-dolphin.png",
            "https://freesvg.org/img/dolphin-silhouette.png",
        ),
        (
            "https://openclipart.org/download/279910/1494961085.svg",
            "ocean-whale.png",
            "https://freesvg.org/img/1539016128.png",
        ),
        (
            "https://openclipart.org/download/223647/Crab-001.svg",
            "ocean-crab.png",
            "https://freesvg.org/img/Crab-by-Rones.png",
        ),
    ]
    .into_iter()
    .map(|(url, filename, fallback)| Job {
        url: url.to_string(),
        filename: filename.to_string(),
        fallback_url: Some(fallback.to_string()),
    })
    .collect()
}
