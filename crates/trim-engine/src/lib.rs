//! Response trimming pipeline
//!
//! parse → subcategory filter → name prefix filter → quota filter →
//! optimize (only above the size threshold) → format

pub mod factory;
pub mod report;

use std::time::Instant;

use tracing::{debug, info, info_span};
use trim_config::Config;
use trim_core::{
    CatalogResponse, Result, TrimError, VariantKind, VariantSpec, render_tokens,
};
use trim_filters::FilterChain;
use trim_optimizer::QuotaOptimizer;

pub use factory::ProcessorFactory;
pub use report::TrimReport;

/// Payloads at or below this many characters are never optimized
pub const DEFAULT_THRESHOLD_CHARS: usize = 7000;

/// Stateless trimming pipeline; safe to share across threads
pub struct Trimmer {
    factory: ProcessorFactory,
    optimizer: QuotaOptimizer,
    threshold_chars: usize,
}

impl Trimmer {
    /// Build from configuration (threshold and variant overrides)
    pub fn new(config: &Config) -> Result<Self> {
        let factory = ProcessorFactory::new(
            config.variant_spec(VariantKind::Recharge),
            config.variant_spec(VariantKind::Activation),
        )?;
        Ok(Self::with_factory(factory, config.threshold_chars))
    }

    /// Built-in variants and the default threshold
    pub fn with_defaults() -> Result<Self> {
        let factory = ProcessorFactory::new(VariantSpec::recharge(), VariantSpec::activation())?;
        Ok(Self::with_factory(factory, DEFAULT_THRESHOLD_CHARS))
    }

    pub fn with_factory(factory: ProcessorFactory, threshold_chars: usize) -> Self {
        Self {
            factory,
            optimizer: QuotaOptimizer::new(),
            threshold_chars,
        }
    }

    pub fn factory(&self) -> &ProcessorFactory {
        &self.factory
    }

    pub fn threshold_chars(&self) -> usize {
        self.threshold_chars
    }

    /// Trim a raw catalog payload into the compact token string
    pub fn process(&self, category: &str, raw_payload: &str) -> Result<String> {
        Ok(self.process_with_report(category, raw_payload)?.payload)
    }

    /// Only accept recharge categories
    pub fn process_recharge(&self, category: &str, raw_payload: &str) -> Result<String> {
        self.process_as(VariantKind::Recharge, category, raw_payload)
    }

    /// Only accept activation categories
    pub fn process_activation(&self, category: &str, raw_payload: &str) -> Result<String> {
        self.process_as(VariantKind::Activation, category, raw_payload)
    }

    fn process_as(&self, expected: VariantKind, category: &str, raw_payload: &str) -> Result<String> {
        if self.factory.processor_type(category)? != expected {
            return Err(TrimError::VariantMismatch {
                category: category.to_string(),
                expected,
            });
        }
        self.process(category, raw_payload)
    }

    /// Run the pipeline and return the payload together with stage details
    pub fn process_with_report(&self, category: &str, raw_payload: &str) -> Result<TrimReport> {
        let started = Instant::now();

        // The payload is not read until the category is known
        let (category, spec) = self.factory.resolve(category)?;

        let span = info_span!("trim", category = %category, variant = %spec.kind);
        let _enter = span.enter();

        let input_chars = raw_payload.chars().count();
        info!(input_chars, "response character count");

        let catalog = CatalogResponse::parse(raw_payload, spec)?;
        debug!(
            products = catalog.len(),
            metadata_fields = catalog.metadata.len(),
            "catalog parsed"
        );

        let (mut products, stages) = FilterChain::from_rules(&spec.exclude).apply(catalog.products);
        for count in &stages {
            info!(
                stage = %count.stage,
                before = count.before,
                after = count.after,
                "filter stage applied"
            );
        }

        // Decided on the raw input length, not the filtered set
        let optimized = input_chars > self.threshold_chars;
        let mut rewrites = Vec::new();
        if optimized {
            info!(
                threshold = self.threshold_chars,
                "response exceeds limit, applying quota optimization"
            );
            for product in &mut products {
                let (quota, fired) = self.optimizer.optimize_traced(&product.quota);
                product.quota = quota;
                report::merge_rewrites(&mut rewrites, fired);
            }
            info!(products = products.len(), "optimized quotas");
        } else {
            info!(
                threshold = self.threshold_chars,
                "response within limit, skipping quota optimization"
            );
        }

        let payload = render_tokens(&products);
        let output_chars = payload.chars().count();
        let elapsed_ms = started.elapsed().as_millis() as u64;
        info!(output_chars, elapsed_ms, "final output character count");

        Ok(TrimReport {
            category,
            variant: spec.kind,
            input_chars,
            stages,
            optimized,
            rewrites,
            products: products.len(),
            output_chars,
            payload_hash: blake3::hash(payload.as_bytes()).to_hex().to_string(),
            elapsed_ms,
            payload,
        })
    }
}
