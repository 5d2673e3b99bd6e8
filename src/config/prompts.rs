//! Built-in policy and UI texts

/// Built-in texts that don't require files
pub mod builtin {
    /// Behavioural policy seeded as the first message of every session
    pub const SYSTEM_PROMPT: &str = "You are a helpful assistant specialized in L'Oréal products, routines, and beauty recommendations. Only answer questions directly related to L'Oréal brands, products, skincare, makeup, haircare, routines, and usage recommendations. If asked about unrelated topics, politely refuse and offer to help with L'Oréal product questions instead. Keep answers concise, customer-focused, and friendly. Do not provide medical or legal advice; when relevant, recommend consulting a professional.";

    /// Shown at startup and after a reset
    pub const GREETING: &str = "👋 Hello! I can help with L'Oréal products, routines, and recommendations. Ask me about a product, routine step, or what suits your skin/hair type.";

    pub const NOT_CONFIGURED: &str = "Worker endpoint not configured. Please set WORKER_URL (environment or secrets.toml) to your deployed Cloudflare Worker URL.";

    /// Prefixed to transport and communication failures
    pub const ERROR_PREFIX: &str = "There was an error contacting the worker: ";

    /// Assistant text used when the worker reply has no recognized shape
    pub const UNRECOGNIZED_REPLY: &str =
        "Sorry, I could not understand the response from the worker.";

    pub const THINKING: &str = "Thinking…";
}
