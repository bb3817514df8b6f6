use anyhow::Result;

use reeldeck_core::Catalog;

/// Print the active catalog without entering the TUI. Doubles as a
/// validation pass for `--catalog` files.
pub fn run(catalog: &Catalog) -> Result<()> {
    println!("Featured movies ({}):\n", catalog.movies.len());
    for movie in &catalog.movies {
        println!("  {} - {} [{}]", movie.title, movie.subtitle, movie.rate);
        println!("    Poster: {}", movie.image_url);
        println!();
    }

    println!("Continue watching ({}):\n", catalog.played_movies.len());
    for played in &catalog.played_movies {
        println!("  {} - {} left", played.title, played.time);
    }

    println!("\nDestinations:");
    for entry in &catalog.nav_entries {
        println!("  {}", entry.title);
    }

    Ok(())
}
