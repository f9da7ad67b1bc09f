//! The hard-coded starter catalog.
//!
//! These entries become the global template pool the first time seeding runs
//! against an empty catalog. They are data, not behavior: changing this list
//! changes what new users receive, nothing else.

use crate::models::media_entry::MediaType;

/// One starter catalog entry, inserted as a global template row.
pub struct CatalogEntry {
    pub title: &'static str,
    pub media_type: MediaType,
    pub director: &'static str,
    pub budget: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub year: &'static str,
    pub genre: &'static str,
    pub description: &'static str,
    pub rating: i32,
}

/// Default global entries created when the catalog is empty.
pub const STARTER_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        title: "Blade Runner 2049",
        media_type: MediaType::Movie,
        director: "Denis Villeneuve",
        budget: "$150M",
        location: "Budapest, Hungary",
        duration: "164 min",
        year: "2017",
        genre: "Sci-Fi",
        description: "A young blade runner discovers a long-buried secret that leads him to \
                      track down former blade runner Rick Deckard.",
        rating: 5,
    },
    CatalogEntry {
        title: "The Matrix",
        media_type: MediaType::Movie,
        director: "The Wachowskis",
        budget: "$63M",
        location: "Sydney, Australia",
        duration: "136 min",
        year: "1999",
        genre: "Sci-Fi",
        description: "A computer programmer is led to fight an underground war against powerful \
                      computers who have constructed his entire reality.",
        rating: 5,
    },
    CatalogEntry {
        title: "Cyberpunk: Edgerunners",
        media_type: MediaType::TvShow,
        director: "Hiroyuki Imaishi",
        budget: "$3M/ep",
        location: "Tokyo, Japan",
        duration: "25 min/ep",
        year: "2022",
        genre: "Anime",
        description: "A street kid tries to survive in a technology and body \
                      modification-obsessed city of the future.",
        rating: 5,
    },
    CatalogEntry {
        title: "Black Mirror",
        media_type: MediaType::TvShow,
        director: "Charlie Brooker",
        budget: "$2M/ep",
        location: "London, UK",
        duration: "60 min/ep",
        year: "2011-2019",
        genre: "Sci-Fi",
        description: "An anthology series exploring a twisted, high-tech multiverse where \
                      humanity's greatest innovations collide.",
        rating: 5,
    },
    CatalogEntry {
        title: "Ghost in the Shell",
        media_type: MediaType::Movie,
        director: "Mamoru Oshii",
        budget: "$10M",
        location: "Tokyo, Japan",
        duration: "83 min",
        year: "1995",
        genre: "Anime",
        description: "A cyborg policewoman hunts a powerful hacker known as the Puppet Master.",
        rating: 5,
    },
];
