//! Command execution.
//!
//! Every command writes its result to `out`; engine errors come back as
//! `anyhow` errors with the command as context.

use std::io::{Read, Write};

use anyhow::{bail, Context, Result};
use chrono::SecondsFormat;
use fat_storage::{FileRecord, FileStorageApi, IntegrityReport, Timestamp};

use crate::cli::{Command, ContentArgs};

/// Run one command against `engine`. `input` is only read for `--stdin`.
pub fn run<E, R, W>(engine: &mut E, command: Command, input: R, out: &mut W) -> Result<()>
where
    E: FileStorageApi + ?Sized,
    R: Read,
    W: Write,
{
    match command {
        Command::Create { name, content } => {
            let content = read_content(&content, input)?;
            let record = engine
                .create(&name, &content)
                .with_context(|| format!("create '{}'", name))?;
            writeln!(out, "created '{}' ({} chars)", record.name, record.total_size)?;
        }
        Command::List { trash: false } => {
            let files = engine.list().context("list files")?;
            if files.is_empty() {
                writeln!(out, "(no files)")?;
            }
            for file in files {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}",
                    file.name,
                    file.total_size,
                    fmt_time(&file.created_at),
                    fmt_time(&file.modified_at)
                )?;
            }
        }
        Command::List { trash: true } => {
            let entries = engine.list_trash().context("list trash")?;
            if entries.is_empty() {
                writeln!(out, "(trash is empty)")?;
            }
            for entry in entries {
                writeln!(
                    out,
                    "{}\t{}\t{}",
                    entry.name,
                    entry.total_size,
                    fmt_time(&entry.deleted_at)
                )?;
            }
        }
        Command::Open { name } => {
            let opened = engine
                .open(&name)
                .with_context(|| format!("open '{}'", name))?;
            writeln!(out, "{}", opened.content)?;
        }
        Command::Stat { name } => {
            let record = engine
                .stat(&name)
                .with_context(|| format!("stat '{}'", name))?;
            write_record(out, &record)?;
        }
        Command::Modify { name, content, yes } => {
            let proposed = read_content(&content, input)?;
            modify(engine, &name, &proposed, yes, out)?;
        }
        Command::Delete { name } => {
            engine
                .delete(&name)
                .with_context(|| format!("delete '{}'", name))?;
            writeln!(out, "moved '{}' to the trash", name)?;
        }
        Command::Recover { name } => {
            engine
                .recover(&name)
                .with_context(|| format!("recover '{}'", name))?;
            writeln!(out, "recovered '{}'", name)?;
        }
        Command::Check => {
            let report = engine.check_integrity().context("integrity check")?;
            write_report(out, &report)?;
            if !report.is_clean() {
                bail!("{} integrity issue(s) found", report.issue_count());
            }
        }
    }

    Ok(())
}

/// Content from the argument, from `input` when `--stdin` is set, or empty.
pub fn read_content<R: Read>(args: &ContentArgs, mut input: R) -> Result<String> {
    if args.stdin {
        let mut content = String::new();
        input
            .read_to_string(&mut content)
            .context("read content from stdin")?;
        return Ok(content);
    }
    Ok(args.content.clone().unwrap_or_default())
}

fn modify<E, W>(engine: &mut E, name: &str, proposed: &str, commit: bool, out: &mut W) -> Result<()>
where
    E: FileStorageApi + ?Sized,
    W: Write,
{
    // Opening first surfaces FileNotFound and InTrash before any preview
    let current = engine
        .open(name)
        .with_context(|| format!("modify '{}'", name))?;

    if !commit {
        writeln!(out, "current content of '{}':", name)?;
        writeln!(out, "{}", current.content)?;
        writeln!(out, "proposed content:")?;
        writeln!(out, "{}", proposed)?;
        writeln!(out, "modification cancelled (pass --yes to commit)")?;
        return Ok(());
    }

    let record = engine
        .modify(name, proposed)
        .with_context(|| format!("modify '{}'", name))?;
    writeln!(out, "modified '{}' ({} chars)", name, record.total_size)?;
    Ok(())
}

fn write_record<W: Write>(out: &mut W, record: &FileRecord) -> Result<()> {
    writeln!(out, "name:      {}", record.name)?;
    writeln!(out, "size:      {}", record.total_size)?;
    writeln!(
        out,
        "head:      {}",
        record
            .head_ref
            .as_ref()
            .map_or_else(|| "-".to_string(), ToString::to_string)
    )?;
    writeln!(out, "created:   {}", fmt_time(&record.created_at))?;
    writeln!(out, "modified:  {}", fmt_time(&record.modified_at))?;
    writeln!(out, "trashed:   {}", record.trashed)?;
    if let Some(deleted_at) = &record.deleted_at {
        writeln!(out, "deleted:   {}", fmt_time(deleted_at))?;
    }
    Ok(())
}

fn write_report<W: Write>(out: &mut W, report: &IntegrityReport) -> Result<()> {
    writeln!(
        out,
        "scanned {} records, {} blocks",
        report.records_scanned, report.blocks_scanned
    )?;
    for broken in &report.broken_chains {
        writeln!(
            out,
            "broken chain: '{}' at block {}: {}",
            broken.name, broken.key, broken.reason
        )?;
    }
    for key in &report.aliased_blocks {
        writeln!(out, "aliased block: {}", key)?;
    }
    for key in &report.orphaned_blocks {
        writeln!(out, "orphaned block: {}", key)?;
    }
    for finding in &report.inconsistent_records {
        writeln!(out, "inconsistent record: '{}': {}", finding.name, finding.reason)?;
    }
    if report.is_clean() {
        writeln!(out, "ok")?;
    }
    Ok(())
}

fn fmt_time(time: &Timestamp) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
