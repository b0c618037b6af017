/// Fragment appended to a generated `metro.config.js`.
///
/// Excludes `.vscode\.react` from resolution on Windows, moves Metro and
/// Haste caches under `.cache`, and makes Metro watch `.vscode`. Appended
/// as-is: a file patched twice carries the fragment twice.
pub const METRO_CONFIG_PATCH: &str = r#"
// Sometimes on Windows Metro fails to resolve files located at .vscode\.react directory and throws EPERM errors
// To avoid it this directory is added to black list for resolving by Metro
if (process.platform === "win32") {
    module.exports.resolver = {
        blacklistRE: /.*\.vscode\\\.react.*/
    };
}

// Redirect Metro cache
module.exports.cacheStores = [
    new (require('metro-cache')).FileStore({
        root: require('path').join(".cache", 'metro-cache'),
    }),
];

// Redirect Haste Map cache
module.exports.hasteMapCacheDirectory = ".cache";

// Metro on macOS skips dot-folders on its first scan, so './vscode/exponentIndex.js'
// would not be found when the packager starts. Watch the folder explicitly.
module.exports.watchFolders = ['.vscode'];"#;

pub const METRO_CONFIG_FILE: &str = "metro.config.js";
