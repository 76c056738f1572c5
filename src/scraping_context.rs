use crate::{
    config::ScrapingConfig,
    monitored_lines::MonitoredLineSet,
    ratelimit::Pacer,
    requests::{PageSource, RequestClient},
};

/// Everything one run shares: configuration, the whitelist, the HTTP
/// session and the politeness throttle.
pub struct ScrapingContext<S: PageSource = RequestClient> {
    pub config: ScrapingConfig,
    pub monitored_lines: MonitoredLineSet,
    pub source: S,
    pub pacer: Pacer,
}

impl ScrapingContext<RequestClient> {
    pub fn new() -> anyhow::Result<Self> {
        let config = ScrapingConfig::default();
        let request_client = RequestClient::new(&config)?;
        Ok(Self::with_source(
            config,
            MonitoredLineSet::tokyo(),
            request_client,
        ))
    }
}

impl<S: PageSource> ScrapingContext<S> {
    pub fn with_source(
        config: ScrapingConfig,
        monitored_lines: MonitoredLineSet,
        source: S,
    ) -> Self {
        let pacer = Pacer::new(config.pacing);
        Self {
            config,
            monitored_lines,
            source,
            pacer,
        }
    }
}
