#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the scraping collaborator for the images on `url`.
    ScrapePage { url: String },
    /// Ask the packaging collaborator to bundle `images` into an archive
    /// named after `hostname`, then deliver it to disk.
    PackageImages {
        images: Vec<String>,
        hostname: String,
    },
}
