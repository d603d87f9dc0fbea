//! Domain constants shared by the mode table, the lexers and the REPL launcher.

/// Extension of full Cryptol source files.
pub const CRYPTOL_EXT: &str = "cry";

/// Extension of interpreter batch scripts.
pub const BATCH_EXT: &str = "scr";

/// Interpreter executable used when nothing else is configured.
pub const DEFAULT_INTERPRETER: &str = "cryptol";

/// Flag that starts the REPL without its banner.
pub const DEFAULT_REPL_FLAG: &str = "-n";

/// Flag that runs the interpreter in batch compile mode.
pub const DEFAULT_COMPILE_FLAG: &str = "-b";

/// Flag that asks the interpreter to list its compiler backends.
pub const DEFAULT_BACKENDS_FLAG: &str = "--backends";

/// Keyword that introduces a top-level theorem.
pub const THEOREM_KW: &str = "theorem";
