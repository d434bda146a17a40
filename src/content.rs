use std::fmt;
use std::str::FromStr;

/// README text for the Auto Deploy Agent CLI, rendered section by section.
pub const README: &str = r#"
# Auto Deploy Agent CLI

A cutting-edge command-line tool that automatically detects, builds, and deploys web projects to the most suitable hosting platform using AI-powered recommendations.

## 🚀 Key Features

- 🔍 **Automatic Project Detection**: Identifies project types (Next.js, Vite, React, Flask, static sites)
- 🤖 **AI-Powered Platform Recommendation**: Uses Ollama with Llama 3.1 model to suggest the best hosting platform
- 🚀 **One-Command Deployment**: Deploys your project with a single command
- 🛠️ **Automatic CLI Installation**: Guides you through installing required CLIs
- 📦 **Dependency Management**: Automatically installs project dependencies
- 🔧 **Build Automation**: Handles project building when necessary
- 📁 **Modular Architecture**: Code is organized into separate modules for easier maintenance

## ⚡ Quick Start

1. **Install Ollama**: Get Ollama from [ollama.com](https://ollama.com/) and pull the Llama 3.1 model
2. **Install Dependencies**: Run `pip install .` in the project directory
3. **Deploy**: Simply run `deploy-agent` and let AI handle the rest!

## 🎯 Supported Technologies

**Frameworks & Libraries:**
- Next.js
- Vite
- React
- Flask (Python)
- Static HTML/CSS/JS sites

**Deployment Platforms:**
- Vercel (automated)
- Netlify (automated)
- GitHub Pages (manual)
- Cloudflare Pages (automated)
- Render (manual)

## 🛠 Installation Guide

### Prerequisites

1. **Ollama**: Install from https://ollama.com/
   ```bash
   ollama pull llama3.1:8b
   ```

2. **Python**: Version 3.6 or higher

3. **Git**: For Git-based deployments

### Installation Steps

1. Clone the repository
2. Navigate to project directory
3. Install with modern PEP 517 build system:
   ```bash
   pip install .
   ```
4. Verify installation:
   ```bash
   deploy-agent
   ```

## 💡 Usage Examples

### Method 1: Script Execution (Recommended)
```bash
# Windows
deploy.bat

# macOS/Linux
./deploy.sh
```

### Method 2: CLI Command
```bash
deploy-agent
```

### Method 3: Direct Python
```bash
python main.py
```

## 🏗 Modular Architecture

```
Auto Deploy/
├── core/                      # Core functionality modules
│   ├── detector.py            # Project detection logic
│   ├── recommender.py         # Platform recommendation logic
│   ├── model_selector.py      # Ollama model selection
│   ├── cli_manager.py         # CLI tool management
│   ├── git_handler.py         # Git operations
│   ├── builder.py             # Build processes
│   ├── deployer.py            # Deployment functions
│   ├── file_manager.py        # File creation and management
│   └── __init__.py
├── utils/                     # Utility functions
│   └── helpers.py
├── auto_deploy_agent_cli/     # CLI package
│   ├── deploy_agent.py        # CLI entry point
│   └── __init__.py
├── config.py                  # Configuration constants
├── main.py                    # Main entry point
├── deploy.bat                 # Windows deployment script
├── deploy.sh                  # macOS/Linux deployment script
└── pyproject.toml             # Project metadata and dependencies
```

## 🤖 How It Works

1. **🔍 Detection**: Scans your project to identify the type based on project files
2. **🤖 AI Recommendation**: Uses Ollama with Llama 3.1 to recommend the best hosting platform
3. **🛠 CLI Setup**: Guides you through installing required platform CLIs
4. **🔧 Build Process**: Automatically builds your project if needed
5. **🚀 Deployment**: Either automates deployment or provides step-by-step instructions

## 🐍 Flask Configuration

For Flask projects deployed to Vercel:
- Export an `application` variable
- Include `gunicorn` in `requirements.txt`
- Follow Vercel's project structure expectations

## 📋 Deployment Types

**Automated Deployment** (Vercel, Netlify, Cloudflare Pages):
- Fully automated authentication and deployment
- Live URL provided upon successful deployment

**Manual Deployment** (GitHub Pages, Render):
- GitHub Pages: Push to GitHub and enable Pages
- Render: Connect Git repository and configure settings
- Detailed step-by-step instructions provided

## ❓ Troubleshooting

**Common Issues:**
- **Ollama not running**: Ensure Ollama is installed and `llama3.1:8b` model is pulled
- **CLI tools not found**: Install required CLIs using provided commands
- **Deployment failure**: Check internet connection and platform login status
- **Flask to Vercel**: Verify `gunicorn` in `requirements.txt` and proper app export

## 🌟 Why Choose Auto Deploy?

- **AI-Powered**: Intelligent platform recommendations
- **Zero Configuration**: Works out of the box
- **Multi-Platform**: Supports all major hosting providers
- **Developer Friendly**: Clear instructions and error handling
- **Open Source**: Free and community-driven

Ready to automate your deployments? Check out our [GitHub repository](https://github.com/MagicalCoder-12/Auto-Deploy)!
"#;

const SECTION_DELIMITER: &str = "\n## ";
const LOADING_FALLBACK: &str = "# Welcome\n\nContent loading...";
const WELCOME_FALLBACK: &str = "# Welcome\n\nWelcome to Auto Deploy Agent CLI";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Welcome,
    Features,
    Prerequisites,
    Installation,
    Usage,
    Architecture,
    Troubleshooting,
}

impl SectionId {
    /// Navigation order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Welcome,
        SectionId::Features,
        SectionId::Prerequisites,
        SectionId::Installation,
        SectionId::Usage,
        SectionId::Architecture,
        SectionId::Troubleshooting,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Welcome => "welcome",
            SectionId::Features => "features",
            SectionId::Prerequisites => "prerequisites",
            SectionId::Installation => "installation",
            SectionId::Usage => "usage",
            SectionId::Architecture => "architecture",
            SectionId::Troubleshooting => "troubleshooting",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Welcome => "Welcome",
            SectionId::Features => "Features",
            SectionId::Prerequisites => "Prerequisites",
            SectionId::Installation => "Installation",
            SectionId::Usage => "Usage",
            SectionId::Architecture => "Architecture",
            SectionId::Troubleshooting => "Troubleshooting",
        }
    }

    /// Heading text a README fragment must start with to belong to this
    /// section. Matched byte for byte, emoji included. The welcome section is
    /// the preamble before the first `## ` heading and has no title.
    pub fn title_prefix(self) -> Option<&'static str> {
        match self {
            SectionId::Welcome => None,
            SectionId::Features => Some("🚀 Key Features"),
            SectionId::Prerequisites => Some("⚡ Quick Start"),
            SectionId::Installation => Some("🛠 Installation Guide"),
            SectionId::Usage => Some("💡 Usage Examples"),
            SectionId::Architecture => Some("🏗 Modular Architecture"),
            SectionId::Troubleshooting => Some("❓ Troubleshooting"),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section id `{}`", self.0)
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Returns the markdown for `section_id` out of `blob`.
///
/// Never fails: an empty blob, a missing section and an unknown id each
/// degrade to a placeholder or to the whole blob.
pub fn section_content(blob: &str, section_id: &str) -> String {
    if blob.is_empty() {
        return LOADING_FALLBACK.to_string();
    }

    let Ok(section) = section_id.parse::<SectionId>() else {
        return blob.to_string();
    };

    let mut fragments = blob.split(SECTION_DELIMITER);
    let Some(title) = section.title_prefix() else {
        return match fragments.next() {
            Some(preamble) if !preamble.is_empty() => preamble.to_string(),
            _ => WELCOME_FALLBACK.to_string(),
        };
    };

    match fragments.find(|fragment| fragment.trim().starts_with(title)) {
        Some(fragment) => format!("## {fragment}"),
        None => format!("## {title}\n\nContent not found."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_returns_preamble() {
        let welcome = section_content(README, "welcome");
        assert!(welcome.starts_with("\n# Auto Deploy Agent CLI"));
        assert!(welcome.contains("AI-powered recommendations."));
        assert!(!welcome.contains("## "));
    }

    #[test]
    fn known_sections_contain_their_title() {
        for section in SectionId::ALL {
            let Some(title) = section.title_prefix() else {
                continue;
            };
            let text = section_content(README, section.as_str());
            assert!(text.starts_with(&format!("## {title}")), "{section}");
            assert!(!text.contains("Content not found."), "{section}");
        }
    }

    #[test]
    fn section_stops_at_next_heading() {
        let features = section_content(README, "features");
        assert!(features.contains("Modular Architecture**: Code is organized"));
        assert!(!features.contains("⚡ Quick Start"));
    }

    #[test]
    fn unknown_id_returns_whole_blob() {
        assert_eq!(section_content(README, "pricing"), README);
        assert_eq!(section_content(README, "Features"), README);
    }

    #[test]
    fn missing_section_synthesizes_placeholder() {
        let blob = "# Title\n\nintro\n## 🚀 Key Features\n- one\n";
        assert_eq!(
            section_content(blob, "usage"),
            "## 💡 Usage Examples\n\nContent not found."
        );
        assert_eq!(
            section_content(blob, "features"),
            "## 🚀 Key Features\n- one\n"
        );
    }

    #[test]
    fn empty_inputs_fall_back() {
        assert_eq!(section_content("", "welcome"), LOADING_FALLBACK);
        assert_eq!(section_content("\n## 🚀 Key Features\n", "welcome"), WELCOME_FALLBACK);
    }

    #[test]
    fn parses_wire_ids() {
        assert_eq!("usage".parse::<SectionId>(), Ok(SectionId::Usage));
        assert_eq!(
            "USAGE".parse::<SectionId>(),
            Err(UnknownSection("USAGE".to_string()))
        );
        for section in SectionId::ALL {
            assert_eq!(section.as_str().parse::<SectionId>(), Ok(section));
        }
    }
}
