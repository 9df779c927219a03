pub mod models;
pub mod routes;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use once_cell::sync::OnceCell;
use shloka_kernel::{InitCtx, Module};
use shloka_upstream::VerseSource;

/// Proxy module for Bhagavad Gita chapter text, mounted at `/api/gita`.
///
/// The outbound source chain (HTTP client, retry, cache) is built from
/// settings during `init` and injected into the routes as shared state.
pub struct GitaModule {
    source: OnceCell<Arc<dyn VerseSource>>,
}

impl GitaModule {
    pub const fn new() -> Self {
        Self {
            source: OnceCell::new(),
        }
    }
}

#[async_trait]
impl Module for GitaModule {
    fn name(&self) -> &'static str {
        "gita"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let source = shloka_upstream::build_source(&ctx.settings.upstream)
            .map_err(|e| anyhow::anyhow!("failed to build upstream source: {e}"))?;

        self.source
            .set(source)
            .map_err(|_| anyhow::anyhow!("gita module initialized twice"))?;

        tracing::info!(
            module = self.name(),
            upstream = %ctx.settings.upstream.base_url,
            retry_attempts = ctx.settings.upstream.retry.max_attempts,
            cache_enabled = ctx.settings.upstream.cache.enabled,
            "gita module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        match self.source.get() {
            Some(source) => routes::router(source.clone()),
            // init has not run; expose nothing rather than panic.
            None => Router::new(),
        }
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "Fetch chapter verses",
                        "description": "Relays the upstream verse API response for one chapter.",
                        "tags": ["Gita"],
                        "parameters": [
                            {
                                "name": "q",
                                "in": "query",
                                "required": true,
                                "description": "Chapter number, 1 through 18",
                                "schema": {
                                    "type": "integer",
                                    "minimum": 1,
                                    "maximum": 18
                                }
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "Verbatim upstream body",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": {
                                                "$ref": "#/components/schemas/Verse"
                                            }
                                        }
                                    }
                                }
                            },
                            "400": {
                                "description": "Missing or out-of-range chapter number",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorResponse"
                                        }
                                    }
                                }
                            },
                            "500": {
                                "description": "Upstream failure",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorResponse"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/health": {
                    "get": {
                        "summary": "Gita module health check",
                        "tags": ["Gita"],
                        "responses": {
                            "200": {
                                "description": "OK",
                                "content": {
                                    "text/plain": {
                                        "schema": {
                                            "type": "string"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Verse": {
                        "type": "object",
                        "properties": {
                            "geeta_id": {
                                "type": "string",
                                "description": "Composite chapter:verse key"
                            },
                            "chapter": {
                                "type": "integer"
                            },
                            "verse": {
                                "type": "integer"
                            },
                            "shlok": {
                                "type": "string",
                                "description": "Original-language text"
                            },
                            "transliteration": {
                                "type": "string"
                            },
                            "meaning": {
                                "type": "string"
                            },
                            "lyrics": {
                                "type": "string"
                            }
                        },
                        "required": ["geeta_id", "chapter", "verse"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "gita module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "gita module stopped");
        Ok(())
    }
}

/// Create a new instance of the gita module.
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(GitaModule::new())
}
