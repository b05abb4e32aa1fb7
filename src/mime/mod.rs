/*
 * Copyright Stalwart Labs Ltd. See the COPYING
 * file at the top-level directory of this distribution.
 *
 * Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
 * https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
 * <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
 * option. This file may not be copied, modified, or distributed
 * except according to those terms.
 */

//! Lookups between file extensions and MIME types.

use std::{collections::HashMap, sync::OnceLock};

pub mod table;

/// MIME type used for attachments with an unknown extension.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

struct Maps {
    by_extension: HashMap<&'static str, &'static str>,
    by_mime: HashMap<&'static str, &'static str>,
}

static MAPS: OnceLock<Maps> = OnceLock::new();

fn maps() -> &'static Maps {
    MAPS.get_or_init(|| {
        let mut by_extension = HashMap::with_capacity(table::EXTENSIONS.len());
        let mut by_mime = HashMap::with_capacity(table::EXTENSIONS.len());
        for (ext, mime) in table::EXTENSIONS {
            by_extension.insert(*ext, *mime);
            by_mime.insert(*mime, *ext);
        }
        Maps {
            by_extension,
            by_mime,
        }
    })
}

/// Converts file extensions to MIME types and vice versa.
pub trait Convertor {
    /// Returns the MIME type of a file extension, with or without its leading dot.
    fn extension_to_mime(&self, ext: &str) -> Option<&'static str>;

    /// Returns the MIME type of a file name, based on its extension.
    fn filename_to_mime(&self, filename: &str) -> Option<&'static str> {
        self.extension_to_mime(extension(filename))
    }

    /// Returns an extension (including the leading dot) registered for a MIME type.
    fn mime_to_extension(&self, mime: &str) -> Option<&'static str>;
}

/// The built-in extension catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct Catalog;

impl Convertor for Catalog {
    fn extension_to_mime(&self, ext: &str) -> Option<&'static str> {
        extension_to_mime(ext)
    }

    fn mime_to_extension(&self, mime: &str) -> Option<&'static str> {
        mime_to_extension(mime)
    }
}

/// Looks up the MIME type of an extension. The lookup ignores case and an
/// optional leading dot, so `"JPG"`, `".jpg"` and `"jpg"` are equivalent.
pub fn extension_to_mime(ext: &str) -> Option<&'static str> {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    let key = format!(".{}", ext.to_lowercase());
    maps().by_extension.get(key.as_str()).copied()
}

/// Looks up the MIME type of a file name.
pub fn filename_to_mime(filename: &str) -> Option<&'static str> {
    extension_to_mime(extension(filename))
}

/// Returns an extension registered for `mime`. The match is exact and case
/// sensitive. Several extensions may share a MIME type, in which case only one
/// of them is returned.
pub fn mime_to_extension(mime: &str) -> Option<&'static str> {
    maps().by_mime.get(mime).copied()
}

/// Returns the text following the last dot of the final path component,
/// or an empty string when there is none.
fn extension(filename: &str) -> &str {
    let name = filename
        .rsplit(|ch: char| ch == '/' || ch == '\\')
        .next()
        .unwrap_or(filename);
    match name.rfind('.') {
        Some(pos) => &name[pos + 1..],
        None => "",
    }
}

#[cfg(test)]
mod test {
    use super::{
        extension, extension_to_mime, filename_to_mime, mime_to_extension, table, Catalog,
        Convertor,
    };

    #[test]
    fn extension_lookup() {
        for ext in ["JPG", ".jpg", "jpg", ".JpG"] {
            assert_eq!(extension_to_mime(ext), Some("image/jpeg"), "{}", ext);
        }
        assert_eq!(extension_to_mime("docx"), Some(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ));
        assert_eq!(extension_to_mime(".7z"), Some("application/x-7z-compressed"));

        for ext in ["", ".", "unknownext", "..png", "png ", "p ng"] {
            assert_eq!(extension_to_mime(ext), None, "{:?}", ext);
        }
    }

    #[test]
    fn every_table_entry_resolves() {
        for (ext, mime) in table::EXTENSIONS {
            assert_eq!(extension_to_mime(ext), Some(*mime));
            assert_eq!(extension_to_mime(&ext.to_uppercase()), Some(*mime));
            assert_eq!(extension_to_mime(&ext[1..]), Some(*mime));
        }
    }

    #[test]
    fn filename_lookup() {
        for (filename, expected) in [
            ("photo.png", Some("image/png")),
            ("Report.PDF", Some("application/pdf")),
            ("archive.tar.gz", Some("application/gzip")),
            ("archive.tar.GZ", Some("application/gzip")),
            ("/tmp/notes.md", Some("text/markdown")),
            ("C:\\Users\\me\\song.flac", Some("audio/flac")),
            ("data.unknownext", None),
            ("README", None),
            ("dir.d/README", None),
            ("trailing.", None),
            ("", None),
        ] {
            assert_eq!(filename_to_mime(filename), expected, "{:?}", filename);
            assert_eq!(Catalog.filename_to_mime(filename), expected, "{:?}", filename);
        }
    }

    #[test]
    fn extension_split() {
        assert_eq!(extension("a.b.c"), "c");
        assert_eq!(extension(".bashrc"), "bashrc");
        assert_eq!(extension("v1.2/file"), "");
        assert_eq!(extension("file"), "");
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(mime_to_extension("image/png"), Some(".png"));
        assert_eq!(Catalog.mime_to_extension("application/pdf"), Some(".pdf"));

        // Shared MIME types keep the extension listed last.
        assert_eq!(mime_to_extension("audio/midi"), Some(".rmi"));
        assert_eq!(mime_to_extension("message/rfc822"), Some(".nws"));

        // No normalization is applied.
        assert_eq!(mime_to_extension("IMAGE/PNG"), None);
        assert_eq!(mime_to_extension(" image/png"), None);
        assert_eq!(mime_to_extension("application/x-unknown"), None);
        assert_eq!(mime_to_extension(""), None);

        // Every reverse entry maps back to the same MIME type.
        for (_, mime) in table::EXTENSIONS {
            let ext = mime_to_extension(mime).unwrap();
            assert_eq!(extension_to_mime(ext), Some(*mime));
        }
    }
}
