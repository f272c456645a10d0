use serde::Serialize;

/// One image in the charity page's outreach gallery.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Editorial content, updated with site deployments rather than by users.
pub const GALLERY: &[GalleryImage] = &[
    GalleryImage {
        src: "/helping.jpeg",
        alt: "Serving meals to the poor",
    },
    GalleryImage {
        src: "/helping2.jpeg",
        alt: "Distributing food parcels",
    },
    GalleryImage {
        src: "/helping3.jpeg",
        alt: "Community outreach team",
    },
    GalleryImage {
        src: "/helping4.jpeg",
        alt: "Clothing donations and care",
    },
    GalleryImage {
        src: "/helping5.jpeg",
        alt: "Outreach to families",
    },
    GalleryImage {
        src: "/helping6.jpeg",
        alt: "Serving the community with love",
    },
    GalleryImage {
        src: "/helping7.jpeg",
        alt: "Love in action in our city",
    },
    GalleryImage {
        src: "/helping8.jpeg",
        alt: "Feeding program",
    },
    GalleryImage {
        src: "/helping10.jpeg",
        alt: "Community compassion",
    },
];
