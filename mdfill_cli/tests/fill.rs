mod common;

use mdfill_core::AnyEmptyResult;
use similar_asserts::assert_eq;

#[test]
fn fill_replaces_placeholders_and_writes_output() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let markdown = tmp.path().join("report.md");
	let template = tmp.path().join("template.txt");
	let output = tmp.path().join("out.txt");

	std::fs::write(&markdown, common::OUTLINE)?;
	std::fs::write(
		&template,
		"{intro-title}\nby {intro-author}\n\n{intro-summary}\n",
	)?;

	common::mdfill_cmd()
		.arg("fill")
		.arg("--markdown")
		.arg(&markdown)
		.arg("--template")
		.arg(&template)
		.arg("--output")
		.arg(&output)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Filled 3 placeholder(s)"));

	let content = std::fs::read_to_string(&output)?;
	assert_eq!(
		content,
		"Engines of Thought\nby Ada Lovelace\n\nWe built:\n• a mill\n• a store\n"
	);

	Ok(())
}

#[test]
fn fill_keeps_and_reports_unknown_placeholders() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let markdown = tmp.path().join("report.md");
	let template = tmp.path().join("template.txt");
	let output = tmp.path().join("out.txt");

	std::fs::write(&markdown, common::OUTLINE)?;
	std::fs::write(&template, "{intro-author} {intro-missing}")?;

	common::mdfill_cmd()
		.arg("fill")
		.arg("-m")
		.arg(&markdown)
		.arg("-t")
		.arg(&template)
		.arg("-o")
		.arg(&output)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stderr(predicates::str::contains(
			"placeholder `{intro-missing}` has no value",
		));

	let content = std::fs::read_to_string(&output)?;
	assert_eq!(content, "Ada Lovelace {intro-missing}");

	Ok(())
}

#[test]
fn fill_defaults_output_to_template_extension() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let markdown = tmp.path().join("report.md");
	let template = tmp.path().join("letter.html");

	std::fs::write(&markdown, common::OUTLINE)?;
	std::fs::write(&template, "<p>{intro-author}</p>")?;

	common::mdfill_cmd()
		.arg("fill")
		.arg("--markdown")
		.arg(&markdown)
		.arg("--template")
		.arg(&template)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let content = std::fs::read_to_string(tmp.path().join("report.html"))?;
	assert_eq!(content, "<p>Ada Lovelace</p>");

	Ok(())
}

#[test]
fn fill_default_output_never_overwrites_template() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let markdown = tmp.path().join("report.md");
	let template = tmp.path().join("report.html");
	let template_content = "<p>{intro-author}</p>";

	std::fs::write(&markdown, common::OUTLINE)?;
	std::fs::write(&template, template_content)?;

	common::mdfill_cmd()
		.arg("fill")
		.arg("--markdown")
		.arg(&markdown)
		.arg("--template")
		.arg(&template)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	assert_eq!(std::fs::read_to_string(&template)?, template_content);
	let content = std::fs::read_to_string(tmp.path().join("report.filled.html"))?;
	assert_eq!(content, "<p>Ada Lovelace</p>");

	Ok(())
}

#[test]
fn fill_dry_run_does_not_write() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let markdown = tmp.path().join("report.md");
	let template = tmp.path().join("template.txt");
	let output = tmp.path().join("out.txt");

	std::fs::write(&markdown, common::OUTLINE)?;
	std::fs::write(&template, "Author: {intro-author}\n")?;

	common::mdfill_cmd()
		.arg("fill")
		.arg("--dry-run")
		.arg("--markdown")
		.arg(&markdown)
		.arg("--template")
		.arg(&template)
		.arg("--output")
		.arg(&output)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("would write"))
		.stdout(predicates::str::contains("-Author: {intro-author}"))
		.stdout(predicates::str::contains("+Author: Ada Lovelace"));

	assert!(!output.exists());

	Ok(())
}

#[test]
fn fill_uses_bullet_from_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let markdown = tmp.path().join("list.md");
	let template = tmp.path().join("template.txt");
	let output = tmp.path().join("out.txt");

	std::fs::write(tmp.path().join("mdfill.toml"), "bullet = \"→\"\n")?;
	std::fs::write(&markdown, "### Items\n- one\n+ two\n")?;
	std::fs::write(&template, "{items}")?;

	common::mdfill_cmd()
		.arg("fill")
		.arg("--markdown")
		.arg(&markdown)
		.arg("--template")
		.arg(&template)
		.arg("--output")
		.arg(&output)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let content = std::fs::read_to_string(&output)?;
	assert_eq!(content, "→ one\n→ two");

	Ok(())
}

#[test]
fn fill_fails_when_markdown_is_missing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let template = tmp.path().join("template.txt");
	std::fs::write(&template, "{a}")?;

	common::mdfill_cmd()
		.arg("fill")
		.arg("--markdown")
		.arg(tmp.path().join("missing.md"))
		.arg("--template")
		.arg(&template)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to read"));

	Ok(())
}

#[test]
fn fill_requires_markdown_and_template() {
	common::mdfill_cmd()
		.arg("fill")
		.assert()
		.failure()
		.stderr(predicates::str::contains("--markdown"));
}
