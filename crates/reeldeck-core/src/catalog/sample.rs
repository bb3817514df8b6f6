//! Built-in demo catalog.

use super::models::{Movie, NavEntry, NavIcon, PlayedMovie};

/// The four featured movies shipped with the app.
pub fn movies() -> Vec<Movie> {
    vec![
        Movie {
            title: "The Matrix Resurrections".into(),
            subtitle: "David Mitchell".into(),
            rate: "3.4".into(),
            image_url:
                "https://www.themoviedb.org/t/p/w300_and_h450_bestv2/8c4a8kE7PizaGQQnditMmI1xbRp.jpg"
                    .into(),
        },
        Movie {
            title: "Moon Knight".into(),
            subtitle: "Marvel Studio".into(),
            rate: "4.5".into(),
            image_url:
                "https://static.wikia.nocookie.net/marvelcinematicuniverse/images/e/ea/Moon_Knight_Poster_Textless.png/revision/latest/top-crop/width/360/height/360?cb=20220313180026"
                    .into(),
        },
        Movie {
            title: "The Northman".into(),
            subtitle: "Robert Eggers".into(),
            rate: "4.1".into(),
            image_url:
                "https://www.themoviedb.org/t/p/w220_and_h330_face/zhLKlUaF1SEpO58ppHIAyENkwgw.jpg"
                    .into(),
        },
        Movie {
            title: "Umma".into(),
            subtitle: "Iris K. Shim".into(),
            rate: "3.0".into(),
            image_url:
                "https://www.themoviedb.org/t/p/w220_and_h330_face/moLnqJmZ00i2opS0bzCVcaGC0iI.jpg"
                    .into(),
        },
    ]
}

/// The two half-watched movies in the continue-watching row.
pub fn played_movies() -> Vec<PlayedMovie> {
    vec![
        PlayedMovie {
            title: "Morbius".into(),
            time: "30min".into(),
            image_url:
                "https://m.media-amazon.com/images/M/MV5BYjlhNTA3Y2ItYjhiYi00NTBiLTg5MDMtZDJjMDZjNzVjNjJmXkEyXkFqcGdeQXVyMTEyMjM2NDc2._V1_QL75_UX140_CR0,0,140,140_.jpg"
                    .into(),
        },
        PlayedMovie {
            title: "Shang Chi".into(),
            time: "48min".into(),
            image_url:
                "https://static1.colliderimages.com/wordpress/wp-content/uploads/2021/04/shang-chi-and-the-legend-of-the-ten-rings-poster-social.jpg?q=50&fit=contain&w=943&h=472&dpr=1.5"
                    .into(),
        },
    ]
}

/// Cast avatar photos overlaid on the emphasized card.
pub fn cast_avatars() -> Vec<String> {
    vec![
        "https://unsplash.com/photos/IF9TK5Uy-KI/download?ixid=MnwxMjA3fDB8MXxzZWFyY2h8MjB8fHBlcnNvbnxlbnwwfHx8fDE2NTA1MjYwMzQ&force=true&w=640"
            .into(),
        "https://unsplash.com/photos/jmURdhtm7Ng/download?ixid=MnwxMjA3fDB8MXxhbGx8fHx8fHx8fHwxNjUwNTczNTkx&force=true&w=640"
            .into(),
        "https://unsplash.com/photos/mEZ3PoFGs_k/download?ixid=MnwxMjA3fDB8MXxzZWFyY2h8MzN8fHBlcnNvbnxlbnwwfHx8fDE2NTA1NTUxMzI&force=true&w=640"
            .into(),
    ]
}

/// The four fixed destinations of the bottom bar.
pub fn nav_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::new("Explore", NavIcon::Explore),
        NavEntry::new("Play", NavIcon::Play),
        NavEntry::new("Favorite", NavIcon::Favorite),
        NavEntry::new("Account", NavIcon::Account),
    ]
}
