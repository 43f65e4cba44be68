// Topical: latent-topic inference for news articles.
//
// This is the library root. The inference pipeline runs
// normalize -> vectorize -> score -> rank over a model artifact fitted
// offline and loaded once per process.

pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod ranking;
pub mod scoring;
pub mod web;
