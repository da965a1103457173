// src/constants.rs

/// File rewritten when no path is given, relative to the working directory.
pub const DEFAULT_TARGET_PATH: &str = "src/components/Shop.js";

/// URL prefix of the placeholder image service being replaced.
pub const PLACEHOLDER_PREFIX: &str = "https://via.placeholder.com/";

/// Host of the replacement image service.
pub const REPLACEMENT_HOST: &str = "https://picsum.photos";

/// Fixed path segment appended to the replacement host (300x300 images).
pub const REPLACEMENT_PATH: &str = "/300/300";

/// Query key carrying the sequential counter.
pub const REPLACEMENT_QUERY_KEY: &str = "random";
