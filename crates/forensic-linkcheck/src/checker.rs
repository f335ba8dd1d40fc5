//! Batch link checking with bounded concurrency

use crate::config::LinkCheckConfig;
use crate::error::LinkCheckError;
use crate::extract::select_urls;
use crate::metrics::LinkCheckMetrics;
use crate::probe::{HttpProber, ProbeFailure, Prober};
use crate::report::LinkReport;
use forensic_domain::UrlCheckResult;
use futures::stream::{self, StreamExt};
use std::sync::Mutex;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Completion progress of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Probes finished so far
    pub completed: usize,
    /// URLs selected for the batch
    pub total: usize,
}

impl Progress {
    /// Completed share in `0.0..=1.0`
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    /// Completed share as a whole percentage
    pub fn percent(&self) -> u8 {
        (self.fraction() * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Probes every URL of a batch and classifies the outcomes
///
/// Metrics accumulate across batches until [`LinkChecker::reset_metrics`].
pub struct LinkChecker<P = HttpProber> {
    prober: P,
    config: LinkCheckConfig,
    metrics: Mutex<LinkCheckMetrics>,
}

impl LinkChecker<HttpProber> {
    /// Create a checker that probes over HTTP
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn from_config(config: LinkCheckConfig) -> Result<Self, LinkCheckError> {
        config.validate().map_err(LinkCheckError::Config)?;
        let prober = HttpProber::new(&config)?;
        Ok(Self::with_prober(prober, config))
    }
}

impl<P: Prober> LinkChecker<P> {
    /// Create a checker around any prober
    pub fn with_prober(prober: P, config: LinkCheckConfig) -> Self {
        Self {
            prober,
            config,
            metrics: Mutex::new(LinkCheckMetrics::new()),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &LinkCheckConfig {
        &self.config
    }

    /// Extract, deduplicate and cap the URLs in `text`, then probe them
    pub async fn check_text<F>(&self, text: &str, on_progress: F) -> LinkReport
    where
        F: FnMut(Progress),
    {
        let urls = select_urls(text, self.config.max_urls);
        self.check_urls(urls, on_progress).await
    }

    /// Like [`check_text`](Self::check_text), stopping early when `cancel` fires
    pub async fn check_text_with_cancel<F>(
        &self,
        text: &str,
        cancel: &CancellationToken,
        on_progress: F,
    ) -> LinkReport
    where
        F: FnMut(Progress),
    {
        let urls = select_urls(text, self.config.max_urls);
        self.check_urls_with_cancel(urls, cancel, on_progress).await
    }

    /// Probe an explicit URL list
    ///
    /// The list is used as given: no deduplication or cap is applied.
    pub async fn check_urls<F>(&self, urls: Vec<String>, on_progress: F) -> LinkReport
    where
        F: FnMut(Progress),
    {
        self.check_urls_with_cancel(urls, &CancellationToken::new(), on_progress).await
    }

    /// Probe an explicit URL list, stopping early when `cancel` fires
    ///
    /// Once cancelled, no further probes are issued; probes already in flight
    /// complete and are reported. URLs never probed are counted as skipped.
    pub async fn check_urls_with_cancel<F>(
        &self,
        urls: Vec<String>,
        cancel: &CancellationToken,
        mut on_progress: F,
    ) -> LinkReport
    where
        F: FnMut(Progress),
    {
        let total = urls.len();
        if total == 0 {
            debug!("No URLs to check");
            return LinkReport::new(Vec::new(), 0, false, 0);
        }

        let started = Instant::now();
        info!(
            "Checking {} URLs (concurrency: {}, timeout: {:?})",
            total,
            self.config.concurrency,
            self.config.timeout()
        );

        let mut slots: Vec<Option<UrlCheckResult>> = vec![None; total];
        let mut completed = 0;
        let mut batch_metrics = LinkCheckMetrics::new();

        let probes = stream::iter(urls.iter().enumerate())
            .take_while(|_| futures::future::ready(!cancel.is_cancelled()))
            .map(|(idx, url)| async move {
                let (result, failure) = self.probe_one(url).await;
                (idx, result, failure)
            })
            .buffer_unordered(self.config.concurrency);
        let mut probes = std::pin::pin!(probes);

        while let Some((idx, result, failure)) = probes.next().await {
            batch_metrics.record_result(&result);
            if let Some(failure) = failure {
                batch_metrics.record_failure(failure.kind());
            }
            slots[idx] = Some(result);
            completed += 1;
            on_progress(Progress { completed, total });
        }

        let results: Vec<UrlCheckResult> = slots.into_iter().flatten().collect();
        let skipped = total - results.len();
        let cancelled = skipped > 0;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        batch_metrics.record_batch(elapsed_ms);
        if let Ok(mut metrics) = self.metrics.lock() {
            metrics.merge(&batch_metrics);
        }

        let report = LinkReport::new(results, skipped, cancelled, elapsed_ms);
        info!(
            "Link check finished in {}ms: {} ok, {} dead, {} unreachable, {} skipped",
            elapsed_ms, report.summary.ok, report.summary.dead, report.summary.unreachable, skipped
        );
        report
    }

    /// Probe one URL; failures become an UNREACHABLE result
    async fn probe_one(&self, url: &str) -> (UrlCheckResult, Option<ProbeFailure>) {
        match self.prober.probe(url).await {
            Ok(status) => {
                debug!("{} -> {}", url, status);
                (UrlCheckResult::new(url, Some(status)), None)
            }
            Err(failure) => {
                warn!("Probe failed for {}: {}", url, failure);
                (UrlCheckResult::failed(url, failure.to_string()), Some(failure))
            }
        }
    }

    /// Snapshot of the metrics accumulated so far
    pub fn metrics(&self) -> LinkCheckMetrics {
        self.metrics
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    /// Reset the accumulated metrics
    pub fn reset_metrics(&self) {
        if let Ok(mut metrics) = self.metrics.lock() {
            metrics.reset();
        }
    }
}
