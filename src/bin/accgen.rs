use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use accgen::codegen::LabelAllocator;
use accgen::config::CodegenOptions;
use accgen::demos::{self, DEMOS, Demo};
use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;

const SEPARATOR: &str = "--------------------";

/// 输出内置示例程序的伪汇编清单
#[derive(Parser, Debug)]
#[command(name = "accgen", version)]
struct Cli {
    /// 要输出的示例（省略时输出全部）
    demos: Vec<String>,

    /// 严格模式：拒绝未在数据段中声明的变量
    #[arg(long)]
    strict: bool,

    /// 严格模式下额外允许的名称（可重复）
    #[arg(long = "symbol", value_name = "NAME")]
    symbols: Vec<String>,

    /// 输出到文件而不是标准输出
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// 列出可用的示例并退出
    #[arg(long)]
    list: bool,
}

fn selected_demos(names: &[String]) -> Result<Vec<&'static Demo>> {
    if names.is_empty() {
        return Ok(DEMOS.iter().collect());
    }
    names
        .iter()
        .map(|name| match demos::find(name) {
            Some(demo) => Ok(demo),
            None => bail!("unknown demo '{}' (try --list)", name),
        })
        .collect()
}

fn run(cli: Cli) -> Result<()> {
    if cli.list {
        for demo in DEMOS.iter() {
            println!("{:<16} {}", demo.name, demo.description);
        }
        return Ok(());
    }

    let mut options = if cli.strict {
        CodegenOptions::strict()
    } else {
        CodegenOptions::default()
    };
    options = options.with_symbols(cli.symbols);

    let selected = selected_demos(&cli.demos)?;
    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create '{}'", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    // 所有示例共用一个分配器，清单之间标签也不重复
    let labels = LabelAllocator::new();
    for (i, demo) in selected.iter().enumerate() {
        info!("generating demo '{}'", demo.name);
        if i > 0 {
            writeln!(out, "{}", SEPARATOR)?;
        }
        let listing = (demo.build)(&labels)
            .assemble(&options)
            .with_context(|| format!("failed to generate demo '{}'", demo.name))?;
        listing.write_to(&mut out)?;
    }

    if let Some(path) = &cli.output {
        info!("wrote {} listings to {}", selected.len(), path.display());
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}
