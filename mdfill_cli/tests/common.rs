use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn mdfill_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("mdfill"));
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}

#[allow(dead_code)]
pub const OUTLINE: &str = "# Quarterly report\n\n## Intro\n\nAuthor\n: Ada Lovelace\n\n### \
                           Title\n**Engines of Thought**\n\n### Summary\nWe built:\n- a \
                           mill\n+ a store\n";
