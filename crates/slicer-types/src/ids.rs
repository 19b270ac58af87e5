//! Stable identifiers: command names, error kinds and report tokens.

// Commands
pub const CMD_MODEL_VALIDATE: &str = "model validate";
pub const CMD_MODEL_CONVERT: &str = "model convert";
pub const CMD_MODEL_EDIT: &str = "model edit";
pub const CMD_SERVE: &str = "serve";
pub const CMD_TEST: &str = "test";
pub const CMD_DENORMALIZE: &str = "denormalize";
pub const CMD_DDL: &str = "ddl";

// Error kinds
pub const KIND_MODEL_LOAD: &str = "ModelLoadError";
pub const KIND_MODEL: &str = "ModelError";
pub const KIND_NO_SUCH_CUBE: &str = "NoSuchCubeError";
pub const KIND_NO_SUCH_STORE: &str = "NoSuchStoreError";
pub const KIND_BACKEND: &str = "BackendError";
pub const KIND_CONFIGURATION: &str = "ConfigurationError";
pub const KIND_ARGUMENT: &str = "ArgumentError";
pub const KIND_NOT_SUPPORTED: &str = "NotSupportedError";
pub const KIND_MISSING_PACKAGE: &str = "MissingPackageError";
pub const KIND_IO: &str = "IOError";

// Test report
pub const TOKEN_SKIPPED: &str = "pass";
pub const TOKEN_BROWSER_ERROR: &str = "BROWSER ERROR";
pub const TOKEN_PASSED_NO_TEST: &str = "pass - no test";
pub const TOKEN_PASSED: &str = "OK";
pub const TOKEN_TESTED_ERROR: &str = "ERROR";
pub const TEST_PASSED_LINE: &str = "test passed";

// Stores
pub const DEFAULT_STORE: &str = "default";
