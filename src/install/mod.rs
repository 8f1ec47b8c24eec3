//! Platform-specific installation instructions.
//!
//! Static text lookup backing the `install-help` command and the
//! suggestions attached to failed tool checks. Instructions are keyed
//! by tool and operating system; unknown combinations yield `None`.

/// Tools with installation instructions.
pub const KNOWN_TOOLS: &[&str] = &["git", "cmake", "doxygen", "ccache"];

/// Installation instructions for a tool on the current platform.
pub fn install_instructions(tool: &str) -> Option<&'static str> {
    install_instructions_for(tool, std::env::consts::OS)
}

/// Installation instructions for a tool on a specific platform.
pub fn install_instructions_for(tool: &str, os: &str) -> Option<&'static str> {
    match (tool.to_lowercase().as_str(), os) {
        ("git", "windows") => Some(GIT_WINDOWS),
        ("git", "macos") => Some(GIT_MACOS),
        ("git", "linux") => Some(GIT_LINUX),
        ("cmake", "windows") => Some(CMAKE_WINDOWS),
        ("cmake", "macos") => Some(CMAKE_MACOS),
        ("cmake", "linux") => Some(CMAKE_LINUX),
        ("doxygen", "windows") => Some(DOXYGEN_WINDOWS),
        ("doxygen", "macos") => Some(DOXYGEN_MACOS),
        ("doxygen", "linux") => Some(DOXYGEN_LINUX),
        ("ccache", "windows") => Some(CCACHE_WINDOWS),
        ("ccache", "macos") => Some(CCACHE_MACOS),
        ("ccache", "linux") => Some(CCACHE_LINUX),
        _ => None,
    }
}

const GIT_WINDOWS: &str = "\
Installing Git on Windows

  Official installer:  https://git-scm.com/download/win
  winget:              winget install Git.Git
  chocolatey:          choco install git
  scoop:               scoop install git

Restart your terminal after installing.";

const GIT_MACOS: &str = "\
Installing Git on macOS

  Xcode tools (recommended):  xcode-select --install
  Homebrew:                   brew install git
  MacPorts:                   sudo port install git
  Official installer:         https://git-scm.com/download/mac";

const GIT_LINUX: &str = "\
Installing Git on Linux

  Ubuntu/Debian:  sudo apt update && sudo apt install git
  Fedora/RHEL:    sudo dnf install git
  Arch:           sudo pacman -S git
  SUSE:           sudo zypper install git";

const CMAKE_WINDOWS: &str = "\
Installing CMake on Windows

  Official installer (recommended):  https://cmake.org/download/
    Choose the Windows x64 installer and add CMake to PATH.
  winget:                            winget install Kitware.CMake
  chocolatey:                        choco install cmake
  scoop:                             scoop install cmake

Restart your terminal after installing.";

const CMAKE_MACOS: &str = "\
Installing CMake on macOS

  Homebrew (recommended):  brew install cmake
  MacPorts:                sudo port install cmake
  Official installer:      https://cmake.org/download/";

const CMAKE_LINUX: &str = "\
Installing CMake on Linux

  Ubuntu/Debian:  sudo apt update && sudo apt install cmake
  Fedora/RHEL:    sudo dnf install cmake
  Arch:           sudo pacman -S cmake
  SUSE:           sudo zypper install cmake

For the latest release, download from https://cmake.org/download/";

const DOXYGEN_WINDOWS: &str = "\
Installing Doxygen on Windows

  Official installer:  https://www.doxygen.nl/download.html
  chocolatey:          choco install doxygen.install
  winget:              winget install DimitriVanHeesch.Doxygen

Restart your terminal after installing.";

const DOXYGEN_MACOS: &str = "\
Installing Doxygen on macOS

  Homebrew (recommended):  brew install doxygen
  MacPorts:                sudo port install doxygen
  Official binary:         https://www.doxygen.nl/download.html";

const DOXYGEN_LINUX: &str = "\
Installing Doxygen on Linux

  Ubuntu/Debian:  sudo apt update && sudo apt install doxygen
  Fedora/RHEL:    sudo dnf install doxygen
  Arch:           sudo pacman -S doxygen
  SUSE:           sudo zypper install doxygen";

const CCACHE_WINDOWS: &str = "\
Installing ccache on Windows

  chocolatey:            choco install ccache
  vcpkg:                 vcpkg install ccache
  Pre-built binaries:    https://github.com/ccache/ccache/releases

ccache support on Windows is experimental.";

const CCACHE_MACOS: &str = "\
Installing ccache on macOS

  Homebrew (recommended):  brew install ccache
  MacPorts:                sudo port install ccache
  From source:             https://ccache.dev/";

const CCACHE_LINUX: &str = "\
Installing ccache on Linux

  Ubuntu/Debian:  sudo apt update && sudo apt install ccache
  Fedora/RHEL:    sudo dnf install ccache
  Arch:           sudo pacman -S ccache
  SUSE:           sudo zypper install ccache";
