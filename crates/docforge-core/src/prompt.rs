//! README prompt builder.
//!
//! Renders a [`ProjectAnalysis`] into the single instruction string sent to
//! the generation model. The template is deterministic: the same analysis
//! always produces byte-identical output, and the CRITICAL RULES block exists
//! to suppress invented content, since the model has no ground truth about
//! the project beyond what the analysis says.
//!
//! Layout:
//! ```text
//! <persona preamble>
//! PROJECT ANALYSIS: name / languages / frameworks / file count / LOC
//! PROJECT STRUCTURE: first 40 paths, one per line, scanner order
//! REQUIREMENTS FOR THE README: ten numbered sections
//! STYLE GUIDELINES
//! CRITICAL RULES
//! OUTPUT FORMAT
//! ```

use docforge_types::analysis::ProjectAnalysis;

/// Only this many `structure` entries are embedded, to bound prompt size.
const STRUCTURE_PREVIEW_LIMIT: usize = 40;

/// Marker rendered in place of an empty language/framework list.
const NOT_DETECTED: &str = "Not detected";

/// Builds the README generation prompt from a project analysis.
pub struct ReadmePromptBuilder;

impl ReadmePromptBuilder {
    /// Render the complete prompt.
    ///
    /// Total for any well-formed analysis: missing optional fields render
    /// as neutral markers, never as omitted sections.
    pub fn build(analysis: &ProjectAnalysis) -> String {
        let name = if analysis.name.trim().is_empty() {
            "Unknown"
        } else {
            analysis.name.as_str()
        };
        let languages = join_or_not_detected(&analysis.languages);
        let frameworks = join_or_not_detected(&analysis.frameworks);
        let structure_preview = analysis
            .structure
            .iter()
            .take(STRUCTURE_PREVIEW_LIMIT)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"You are a senior technical writer and developer advocate. Generate a comprehensive, professional README.md file that follows GitHub best practices.

PROJECT ANALYSIS:
- Name: {name}
- Primary Languages: {languages}
- Frameworks/Tools: {frameworks}
- Total Files: {file_count}
- Estimated Lines of Code: {estimated_loc}

PROJECT STRUCTURE:
{structure_preview}

REQUIREMENTS FOR THE README:

1. **Title & Description**
   - Use an engaging emoji that fits the project type
   - Write a clear, compelling 2-3 sentence description
   - Explain WHAT the project does and WHY it exists

2. **Features Section** (✨ Features)
   - List 4-6 key features based on the project structure
   - Be specific (e.g., "User authentication with JWT" not just "Authentication")
   - Use bullet points with descriptive icons/emojis

3. **Tech Stack Section** (🛠️ Tech Stack)
   - Organize by category: Frontend, Backend, Database, Tools
   - Only include technologies you can confirm from the structure
   - Be specific about versions if visible in package files

4. **Architecture & Design** (🏗️ Architecture)
   - Describe the high-level architecture (e.g., Client-Server, MVC)
   - If frontend/backend exists, explain their relationship
   - Mention key design patterns observed (e.g., Component-based, Service-layer)

5. **Getting Started** (🚀 Getting Started)
   - Include Prerequisites section
   - Provide clear Installation steps
   - Add Running the Application steps
   - If it's a full-stack app, show both frontend and backend setup

6. **Project Structure** (📁 Project Structure)
   - Show a clean tree view of main directories
   - Add brief comments explaining key folders
   - Keep it concise (top-level only)

7. **API Documentation** (📚 API Documentation) - ONLY if backend detected
   - Mention that API docs are available
   - Suggest where to find endpoint details

8. **Environment Variables** - ONLY if .env files detected
   - List required environment variables
   - Provide example values (not real secrets)

9. **Contributing** (🤝 Contributing)
   - Brief, welcoming contribution guidelines

10. **License** (📄 License)
   - Mention license if detected, otherwise use MIT

STYLE GUIDELINES:
- Use emojis strategically (one per section header)
- Use code blocks with proper language tags
- Use tables for structured data when appropriate
- Keep paragraphs short and scannable
- Use **bold** for emphasis
- Use `code` for technical terms

CRITICAL RULES:
- DO NOT invent features that aren't evident from the structure
- DO NOT add placeholder text like "Add your description here"
- DO NOT include badges (they'll be added separately)
- DO NOT make assumptions about deployment or testing unless files indicate it
- DO write in present tense
- DO be specific and actionable

OUTPUT FORMAT:
Generate ONLY the markdown content. Do not wrap in ```markdown blocks.
Start directly with the # title.

IMPORTANT: You MUST generate the COMPLETE README covering ALL sections from 1 to 10. Do not stop early. Ensure the response is complete.

Generate the README now:"#,
            file_count = analysis.file_count,
            estimated_loc = analysis.estimated_loc,
        )
    }
}

fn join_or_not_detected(items: &[String]) -> String {
    if items.is_empty() {
        NOT_DETECTED.to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(structure: Vec<String>) -> ProjectAnalysis {
        ProjectAnalysis {
            name: "demo".to_string(),
            structure,
            languages: vec!["Python".to_string()],
            frameworks: vec![],
            file_count: 2,
            estimated_loc: 50,
            description: None,
            dependencies: None,
            scripts: None,
            api_key: None,
        }
    }

    #[test]
    fn prompt_is_deterministic() {
        let a = analysis(vec!["a.py".to_string(), "b.py".to_string()]);
        assert_eq!(ReadmePromptBuilder::build(&a), ReadmePromptBuilder::build(&a));
    }

    #[test]
    fn prompt_embeds_analysis_summary() {
        let a = analysis(vec!["a.py".to_string()]);
        let prompt = ReadmePromptBuilder::build(&a);

        assert!(prompt.contains("- Name: demo"));
        assert!(prompt.contains("- Primary Languages: Python"));
        assert!(prompt.contains("- Total Files: 2"));
        assert!(prompt.contains("- Estimated Lines of Code: 50"));
        assert!(prompt.starts_with("You are a senior technical writer"));
        assert!(prompt.ends_with("Generate the README now:"));
    }

    #[test]
    fn structure_preview_truncates_to_forty_entries() {
        let structure: Vec<String> = (0..100).map(|i| format!("src/file_{i:03}.rs")).collect();
        let prompt = ReadmePromptBuilder::build(&analysis(structure));

        assert!(prompt.contains("src/file_000.rs"));
        assert!(prompt.contains("src/file_039.rs"));
        assert!(!prompt.contains("src/file_040.rs"));
    }

    #[test]
    fn preserves_structure_order() {
        let prompt = ReadmePromptBuilder::build(&analysis(vec![
            "zz.rs".to_string(),
            "aa.rs".to_string(),
        ]));
        let zz = prompt.find("zz.rs").unwrap();
        let aa = prompt.find("aa.rs").unwrap();
        assert!(zz < aa);
    }

    #[test]
    fn empty_lists_render_not_detected() {
        let mut a = analysis(vec![]);
        a.languages.clear();
        a.frameworks.clear();
        let prompt = ReadmePromptBuilder::build(&a);

        assert!(prompt.contains("- Primary Languages: Not detected"));
        assert!(prompt.contains("- Frameworks/Tools: Not detected"));
    }

    #[test]
    fn blank_name_renders_unknown() {
        let mut a = analysis(vec![]);
        a.name = "   ".to_string();
        let prompt = ReadmePromptBuilder::build(&a);
        assert!(prompt.contains("- Name: Unknown"));
    }

    #[test]
    fn multiple_languages_are_comma_joined() {
        let mut a = analysis(vec![]);
        a.languages = vec!["TypeScript".to_string(), "Python".to_string()];
        let prompt = ReadmePromptBuilder::build(&a);
        assert!(prompt.contains("- Primary Languages: TypeScript, Python"));
    }
}
