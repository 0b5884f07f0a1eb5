//! File naming rules for a corpus directory
//!
//! Every file in a corpus directory starts with the id of the article it
//! belongs to:
//!
//! | pattern | meaning |
//! |---|---|
//! | `<id>_raw.txt` | raw article text |
//! | `<id>_meta.json` | metadata record |
//! | `<id>_<artifact>.txt` | stage-1 artifacts |
//! | `<id>_image.<ext>` | stage-2 visualization |

use crate::{ArticleId, ArtifactKind};

/// Suffix of raw text files
pub const RAW_SUFFIX: &str = "_raw.txt";

/// Suffix of metadata files
pub const META_SUFFIX: &str = "_meta.json";

/// File name of an article's raw text
pub fn raw_file_name(id: ArticleId) -> String {
    format!("{}{}", id, RAW_SUFFIX)
}

/// File name of an article's metadata record
pub fn meta_file_name(id: ArticleId) -> String {
    format!("{}{}", id, META_SUFFIX)
}

/// File name of a stage-1 artifact
pub fn artifact_file_name(id: ArticleId, kind: ArtifactKind) -> String {
    format!("{}_{}.txt", id, kind.as_str())
}

/// File name of the stage-2 visualization
pub fn image_file_name(id: ArticleId, extension: &str) -> String {
    format!("{}_image.{}", id, extension.trim_start_matches('.'))
}

/// Extract the integer a file name starts with
///
/// Returns `None` when the name does not start with an ASCII digit or the
/// number does not fit the id range. Zero is returned as-is: deciding
/// whether `0` is acceptable belongs to the caller.
///
/// # Examples
///
/// ```
/// use scriptorium_domain::naming::leading_number;
///
/// assert_eq!(leading_number("12_raw.txt"), Some(12));
/// assert_eq!(leading_number("raw_12.txt"), None);
/// ```
pub fn leading_number(file_name: &str) -> Option<u32> {
    let digits_end = file_name
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(file_name.len());
    if digits_end == 0 {
        return None;
    }
    file_name[..digits_end].parse().ok()
}

/// Extract the article id a file name starts with
pub fn leading_article_id(file_name: &str) -> Option<ArticleId> {
    leading_number(file_name).and_then(ArticleId::new)
}

/// Whether a file name denotes a raw text file
pub fn is_raw_file(file_name: &str) -> bool {
    file_name.ends_with(RAW_SUFFIX)
}

/// Whether a file name denotes a metadata file
pub fn is_meta_file(file_name: &str) -> bool {
    file_name.ends_with(META_SUFFIX)
}
