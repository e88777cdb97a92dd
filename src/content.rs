//! Static content records and posts.

mod post;
mod site;

pub use post::{FrontMatter, Post, load_posts};
pub use site::{
    Certification, CvData, DEFAULT_OG_IMAGE_BASE, Education, Experience, ExternalLink, Home,
    NavLink, Site, SiteMeta,
};
