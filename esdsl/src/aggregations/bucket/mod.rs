mod date_histogram;
mod histogram;
mod sampler;
mod terms;

pub use date_histogram::DateHistogramAggregation;
pub use histogram::HistogramAggregation;
pub use sampler::SamplerAggregation;
pub use terms::TermsAggregation;
