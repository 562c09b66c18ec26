use std::time::Instant;

use anyhow::Context;
use netwalk_common::config::Config;
use netwalk_common::network::address::Address;
use netwalk_common::network::cidr::Cidr;
use netwalk_common::network::target::Target;
use netwalk_core::AddressStream;
use tokio::io::{self, AsyncWrite, AsyncWriteExt, BufWriter};
use tracing::{debug, warn};

use crate::terminal::print;

pub async fn walk(target: Target, cfg: &Config) -> anyhow::Result<()> {
    match target {
        Target::V4(cidr) => walk_block(cidr, cfg).await,
        Target::V6(cidr) => walk_block(cidr, cfg).await,
    }
}

async fn walk_block<A: Address>(cidr: Cidr<A>, cfg: &Config) -> anyhow::Result<()> {
    print::header(&format!("walking {cidr}"), cfg);
    if cidr.size().is_none_or(|size| size > u128::from(u32::MAX)) && cfg.limit.is_none() {
        warn!("{cidr} is very large, consider --limit");
    }

    let start_time: Instant = Instant::now();
    let mut stream: AddressStream<A> = netwalk_core::enumerate_block(cidr)?;

    let mut out = BufWriter::new(io::stdout());
    let emitted: u64 = write_addresses(&mut stream, &mut out, cfg).await?;
    out.flush().await.context("Failed to flush stdout")?;

    if let Some(termination) = stream.shutdown().await {
        debug!("Producer for {cidr} stopped: {termination:?}");
    }

    print::summary(emitted, start_time.elapsed(), cfg);
    Ok(())
}

/// Writes addresses one per line until the stream ends or the limit hits.
async fn write_addresses<A: Address, W: AsyncWrite + Unpin>(
    stream: &mut AddressStream<A>,
    out: &mut W,
    cfg: &Config,
) -> anyhow::Result<u64> {
    let mut emitted: u64 = 0;

    while !cfg.limit_reached(emitted) {
        let Some(addr) = stream.next().await else {
            break;
        };
        out.write_all(format!("{addr}\n").as_bytes())
            .await
            .context("Failed to write address")?;
        emitted += 1;
    }

    Ok(emitted)
}
