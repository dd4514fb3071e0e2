use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Runs extract, transform and load in order, stopping at the first error.
    pub fn run(&self) -> Result<P::Report> {
        tracing::info!("Starting {} run", self.pipeline.name());

        tracing::debug!("Extracting data...");
        let raw_data = self.pipeline.extract()?;

        tracing::debug!("Transforming data...");
        let transformed = self.pipeline.transform(raw_data)?;

        tracing::debug!("Loading data...");
        let report = self.pipeline.load(transformed)?;

        tracing::info!("{} run finished", self.pipeline.name());
        Ok(report)
    }
}
