/// One image to fetch: the file name it is saved under and the URL it
/// comes from. The table is fixed at compile time and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub filename: &'static str,
    pub url: &'static str,
}

/// Dog breeds and their corresponding Unsplash image URLs, processed in
/// declaration order. `french-bulldog.jpg` and `bulldog.jpg` point at the
/// same URL in the source table and are kept as given.
pub const BREED_IMAGES: &[Entry] = &[
    Entry {
        filename: "golden-retriever.jpg",
        url: "https://images.unsplash.com/photo-1633722715463-d30628cqn509?w=400&h=300&fit=crop",
    },
    Entry {
        filename: "german-shepherd.jpg",
        url: "https://images.unsplash.com/photo-1568572933382-74d440642117?w=400&h=300&fit=crop",
    },
    Entry {
        filename: "labrador-retriever.jpg",
        url: "https://images.unsplash.com/photo-1554224311-beee415c15cb?w=400&h=300&fit=crop",
    },
    Entry {
        filename: "french-bulldog.jpg",
        url: "https://images.unsplash.com/photo-1583511655857-d19db992cb74?w=400&h=300&fit=crop",
    },
    Entry {
        filename: "siberian-husky.jpg",
        url: "https://images.unsplash.com/photo-1605804347493-5406d64872b5?w=400&h=300&fit=crop",
    },
    Entry {
        filename: "poodle.jpg",
        url: "https://images.unsplash.com/photo-1537151608828-8661a20b5c15?w=400&h=300&fit=crop",
    },
    Entry {
        filename: "bulldog.jpg",
        url: "https://images.unsplash.com/photo-1583511655857-d19db992cb74?w=400&h=300&fit=crop",
    },
    Entry {
        filename: "beagle.jpg",
        url: "https://images.unsplash.com/photo-1505628346881-b72b27e84530?w=400&h=300&fit=crop",
    },
    Entry {
        filename: "dachshund.jpg",
        url: "https://images.unsplash.com/photo-1587300003388-59208cc962cb?w=400&h=300&fit=crop",
    },
    Entry {
        filename: "rottweiler.jpg",
        url: "https://images.unsplash.com/photo-1567270671170-fdc10a5bf831?w=400&h=300&fit=crop",
    },
    Entry {
        filename: "boxer.jpg",
        url: "https://images.unsplash.com/photo-1568393691622-c8ba131d63b2?w=400&h=300&fit=crop",
    },
    Entry {
        filename: "yorkshire-terrier.jpg",
        url: "https://images.unsplash.com/photo-1612003473085-e8644bfb0c92?w=400&h=300&fit=crop",
    },
];

#[cfg(test)]
mod tests {

    use itertools::Itertools;
    use url::Url;

    use super::BREED_IMAGES;

    #[test]
    fn test_catalog_has_twelve_entries() {
        assert_eq!(BREED_IMAGES.len(), 12);
    }

    #[test]
    fn test_filenames_are_unique() {
        let unique = BREED_IMAGES
            .iter()
            .map(|entry| entry.filename)
            .unique()
            .count();

        assert_eq!(unique, BREED_IMAGES.len());
    }

    #[test]
    fn test_urls_are_valid_https() {
        for entry in BREED_IMAGES {
            let url = Url::parse(entry.url)
                .unwrap_or_else(|_| panic!("Invalid URL for {}", entry.filename));

            assert_eq!(url.scheme(), "https");
        }
    }
}
