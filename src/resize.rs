//! Delivery URL rewriting
//!
//! Delivery paths follow
//! `/<cloud>/<resource_type>/upload/[<transform>/][<version>/]<public_id>.<ext>`.
//! Resizing inserts a transformation segment right after the `upload` segment.

use crate::{Error, Result};
use std::fmt;
use url::Url;

const FORMAT_HINT: &str = "url must be of format https://res.cloudinary.com/<cloudName>/image/upload/";

/// A `c_fit` resize transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resize {
    pub width: u32,
    pub height: u32,
}

impl Resize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w_{},h_{},c_fit", self.width, self.height)
    }
}

/// A parsed image delivery path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryPath<'a> {
    pub cloud_name: &'a str,
    /// Everything after `upload/`: optional transforms, optional version, public id.
    pub remainder: Vec<&'a str>,
}

impl<'a> DeliveryPath<'a> {
    pub fn parse(path: &'a str) -> Result<Self> {
        let invalid = || Error::Validation(FORMAT_HINT.to_string());

        let rest = path.strip_prefix('/').ok_or_else(invalid)?;
        let mut segments = rest.split('/');

        let cloud_name = segments.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
        if segments.next() != Some("image") || segments.next() != Some("upload") {
            return Err(invalid());
        }

        let remainder: Vec<&str> = segments.collect();
        match remainder.last() {
            Some(public_id) if !public_id.is_empty() => {}
            _ => return Err(invalid()),
        }

        Ok(Self {
            cloud_name,
            remainder,
        })
    }

    /// Render with `transform` inserted directly after `upload`.
    pub fn with_transform(&self, transform: &str) -> String {
        let mut path = format!("/{}/image/upload/{}", self.cloud_name, transform);
        for segment in &self.remainder {
            path.push('/');
            path.push_str(segment);
        }
        path
    }
}

/// Return a copy of `image_url` that requests a resized variant.
pub fn resized_image_url(image_url: &Url, width: u32, height: u32) -> Result<Url> {
    let parsed = DeliveryPath::parse(image_url.path())?;
    let new_path = parsed.with_transform(&Resize::new(width, height).to_string());

    let mut resized = image_url.clone();
    resized.set_path(&new_path);
    Ok(resized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn golden_image_url() -> Url {
        Url::parse(
            "https://res.cloudinary.com/yourcloudname/image/upload/v1579703365/q8zrn0wevsuj30albned.png",
        )
        .unwrap()
    }

    fn with_path(path: &str) -> Url {
        let mut url = golden_image_url();
        url.set_path(path);
        url
    }

    #[test]
    fn test_resize_with_version() {
        let resized = resized_image_url(&golden_image_url(), 100, 200).unwrap();
        assert_eq!(
            resized.as_str(),
            "https://res.cloudinary.com/yourcloudname/image/upload/w_100,h_200,c_fit/v1579703365/q8zrn0wevsuj30albned.png"
        );
    }

    #[test]
    fn test_resize_exact_path() {
        let resized = resized_image_url(&with_path("/cloud/image/upload/v123/abc.png"), 100, 200)
            .unwrap();
        assert_eq!(resized.path(), "/cloud/image/upload/w_100,h_200,c_fit/v123/abc.png");
    }

    #[test]
    fn test_resize_without_version() {
        let resized =
            resized_image_url(&with_path("/cloud/image/upload/img.jpg"), 100, 200).unwrap();
        assert_eq!(resized.path(), "/cloud/image/upload/w_100,h_200,c_fit/img.jpg");
    }

    #[test]
    fn test_resize_keeps_query_and_leaves_input_alone() {
        let original = Url::parse("https://res.cloudinary.com/c/image/upload/v1/a.png?x=1#top")
            .unwrap();
        let resized = resized_image_url(&original, 10, 20).unwrap();
        assert_eq!(
            resized.as_str(),
            "https://res.cloudinary.com/c/image/upload/w_10,h_20,c_fit/v1/a.png?x=1#top"
        );
        assert_eq!(original.path(), "/c/image/upload/v1/a.png");
    }

    #[test]
    fn test_resize_rejects_wrong_segments() {
        let err = resized_image_url(&with_path("/cloud/blah/laaa.png"), 100, 200).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("url must be of format"));

        assert!(resized_image_url(&with_path("/cloud/video/upload/v1/a.mp4"), 1, 1).is_err());
        assert!(resized_image_url(&with_path("/cloud/image/fetch/a.png"), 1, 1).is_err());
    }

    #[test]
    fn test_resize_rejects_short_paths() {
        for path in ["/", "/cloud", "/cloud/image", "/cloud/image/upload", "/cloud/image/upload/"] {
            let result = resized_image_url(&with_path(path), 100, 200);
            assert!(
                matches!(result, Err(Error::Validation(_))),
                "accepted {}",
                path
            );
        }
    }

    #[test]
    fn test_resize_rejects_empty_cloud_name() {
        assert!(DeliveryPath::parse("//image/upload/a.png").is_err());
    }

    #[test]
    fn test_resize_display() {
        assert_eq!(Resize::new(640, 480).to_string(), "w_640,h_480,c_fit");
    }

    #[test]
    fn test_delivery_path_parse() {
        let parsed = DeliveryPath::parse("/cloud/image/upload/v1/dir/a.png").unwrap();
        assert_eq!(parsed.cloud_name, "cloud");
        assert_eq!(parsed.remainder, vec!["v1", "dir", "a.png"]);
    }
}
