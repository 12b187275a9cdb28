pub mod compile_time {
    pub mod input {
        /// Maximum length of a single record line (64KB)
        /// Prevents memory exhaustion via oversized lines
        pub const MAX_LINE_LENGTH: usize = 65_536;

        /// Maximum number of lines in a single run
        /// Prevents unbounded accumulation from endless input streams
        pub const MAX_LINE_COUNT: usize = 1_000_000;
    }

    pub mod lexical {
        /// Maximum identifier length
        /// The longest keyword is five characters; anything near this limit
        /// is garbage input, not a typo
        pub const MAX_IDENTIFIER_LENGTH: usize = 255;

        /// Maximum number of tokens produced from a single line
        /// Prevents token explosion from pathological input
        pub const MAX_TOKENS_PER_LINE: usize = 100_000;
    }

    pub mod logging {
        /// Log buffer size for run-wide event collection
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Maximum log events retained per line before truncation
        pub const MAX_LOG_EVENTS_PER_LINE: usize = 100;

        /// Maximum log message length
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;
    }
}
