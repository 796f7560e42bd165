//! Static template files written into every scaffolded project.
//!
//! All content is fixed except the project name, which is substituted into
//! the README title. Paths are relative to the project root; parent
//! directories are created on demand.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Runtime packages installed on top of the generator output.
pub const RUNTIME_PACKAGES: &[&str] =
    &["axios", "react-router-dom", "tailwindcss", "@tailwindcss/vite"];

/// Script entries merged into the generated `package.json`.
pub const MANIFEST_SCRIPTS: &[(&str, &str)] = &[
    ("build", "vite build"),
    ("preview", "vite preview"),
    (
        "lint",
        "eslint . --ext js,jsx --report-unused-disable-directives --max-warnings 0",
    ),
];

/// A fixed file emitted at a predetermined relative path.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    /// Path relative to the project root
    pub path: &'static str,
    /// Literal file content
    pub content: &'static str,
}

/// Every static file written by [`write_all`], in emission order.
pub const PROJECT_FILES: &[TemplateFile] = &[
    TemplateFile {
        path: "index.html",
        content: INDEX_HTML,
    },
    TemplateFile {
        path: ".gitignore",
        content: GITIGNORE,
    },
    TemplateFile {
        path: "public/manifest.json",
        content: PWA_MANIFEST,
    },
    TemplateFile {
        path: "src/index.css",
        content: INDEX_CSS,
    },
    TemplateFile {
        path: "src/App.jsx",
        content: APP_JSX,
    },
    TemplateFile {
        path: "src/components/layout/Layout.jsx",
        content: LAYOUT_JSX,
    },
    TemplateFile {
        path: "src/components/layout/Header.jsx",
        content: HEADER_JSX,
    },
    TemplateFile {
        path: "src/components/layout/Footer.jsx",
        content: FOOTER_JSX,
    },
    TemplateFile {
        path: "src/pages/Home.jsx",
        content: HOME_JSX,
    },
    TemplateFile {
        path: "src/pages/About.jsx",
        content: ABOUT_JSX,
    },
    TemplateFile {
        path: "src/services/api.js",
        content: API_JS,
    },
    TemplateFile {
        path: "src/utils/helpers.js",
        content: HELPERS_JS,
    },
    TemplateFile {
        path: ".env",
        content: ENV,
    },
    TemplateFile {
        path: ".env.example",
        content: ENV_EXAMPLE,
    },
    TemplateFile {
        path: "vite.config.js",
        content: VITE_CONFIG,
    },
];

/// Write every template file plus the README under `base`.
pub fn write_all(base: &Path, project_name: &str) -> Result<()> {
    for file in PROJECT_FILES {
        write_file(base, file.path, file.content)?;
    }
    write_file(base, "README.md", &readme(project_name))
}

fn write_file(base: &Path, relative: &str, content: &str) -> Result<()> {
    let path = base.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&path, content).map_err(|source| Error::WriteFile { path, source })
}

/// README with the project name substituted into the title.
pub fn readme(project_name: &str) -> String {
    format!(
        r##"# {project_name}

A modern React application built with **Vite**, **React**, **Tailwind CSS v4.0**, **Axios**, and **React Router**.

## Quick Start

```bash
# Development
npm run dev

# Build for production
npm run build

# Preview production build
npm run preview

# Lint code
npm run lint
```

## Tech Stack

- **Vite** - Fast build tool and dev server
- **React 18** - UI library with hooks
- **Tailwind CSS v4.0** - Utility-first CSS framework
- **Axios** - HTTP client for API calls
- **React Router** - Client-side routing

## Configuration

- **Environment Variables**: See `.env.example`
- **Vite Config**: `vite.config.js`

## Deployment

Build the project:

```bash
npm run build
```

The `dist/` folder contains the production build ready for deployment.

## License

MIT
"##
    )
}

// ============================================================================
// Template bodies
// ============================================================================

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>%VITE_APP_NAME% | Modern React App</title>
  <meta name="description" content="A modern React application built with Vite, Tailwind CSS v4.0, and Axios for rapid development" />
  <meta name="keywords" content="react, vite, tailwind, axios, javascript, frontend, webapp" />
  <meta name="robots" content="index, follow" />
  <meta property="og:type" content="website" />
  <meta property="og:title" content="%VITE_APP_NAME% | Modern React App" />
  <meta property="og:description" content="A modern React application built with Vite, Tailwind CSS v4.0, and Axios for rapid development" />
  <meta property="og:image" content="/og-image.png" />
  <meta property="twitter:card" content="summary_large_image" />
  <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
  <link rel="apple-touch-icon" href="/apple-touch-icon.png" />
  <meta name="theme-color" content="#3b82f6" />
  <link rel="preconnect" href="https://fonts.googleapis.com" />
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin />
  <link rel="manifest" href="/manifest.json" />
  <style>
    .loading-container {
      position: fixed;
      top: 0;
      left: 0;
      width: 100%;
      height: 100%;
      background: #f9fafb;
      display: flex;
      justify-content: center;
      align-items: center;
      z-index: 9999;
    }
    .loading-spinner {
      width: 40px;
      height: 40px;
      border: 4px solid #e5e7eb;
      border-top: 4px solid #3b82f6;
      border-radius: 50%;
      animation: spin 1s linear infinite;
    }
    @keyframes spin {
      0% { transform: rotate(0deg); }
      100% { transform: rotate(360deg); }
    }
    #root:not(:empty) + .loading-container {
      display: none;
    }
  </style>
</head>
<body class="bg-gray-50 text-gray-900 antialiased">
  <div id="root"></div>
  <div class="loading-container">
    <div class="loading-spinner"></div>
  </div>
  <script type="module" src="/src/main.jsx"></script>
  <noscript>
    <div style="text-align: center; padding: 50px; font-family: Arial, sans-serif;">
      <h1>JavaScript Required</h1>
      <p>This application requires JavaScript to run. Please enable JavaScript in your browser.</p>
    </div>
  </noscript>
</body>
</html>
"##;

const GITIGNORE: &str = r##"# Logs
logs
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*
pnpm-debug.log*

# Dependency directories
node_modules/
jspm_packages/

# Optional npm cache directory
.npm

# Optional eslint cache
.eslintcache

# dotenv environment variable files
.env
.env.development.local
.env.test.local
.env.production.local
.env.local

# Vite build output
dist/
dist-ssr/

# Temporary folders
tmp/
temp/

# IDE
.vscode/
.idea/
*.swp
*.swo
*~

# OS generated files
.DS_Store
._*
Thumbs.db

# Deploy providers
.netlify
.vercel
"##;

const PWA_MANIFEST: &str = r##"{
  "name": "My Vite React App",
  "short_name": "ViteApp",
  "description": "A modern React application built with Vite and Tailwind CSS",
  "start_url": "/",
  "display": "standalone",
  "background_color": "#f9fafb",
  "theme_color": "#3b82f6",
  "orientation": "portrait-primary",
  "icons": [
    {
      "src": "/favicon.png",
      "sizes": "192x192",
      "type": "image/png"
    },
    {
      "src": "/apple-touch-icon.png",
      "sizes": "512x512",
      "type": "image/png"
    }
  ]
}
"##;

const INDEX_CSS: &str = r##"@import "tailwindcss";

@theme {
  --color-primary-50: #eff6ff;
  --color-primary-500: #3b82f6;
  --color-primary-600: #2563eb;
  --color-primary-700: #1d4ed8;
}

@layer base {
  html {
    @apply scroll-smooth;
  }

  body {
    @apply font-sans antialiased;
  }
}

@layer components {
  .btn-primary {
    @apply bg-primary-500 hover:bg-primary-600 text-white font-medium py-2 px-4 rounded-lg transition-colors;
  }

  .container-custom {
    @apply max-w-7xl mx-auto px-4 sm:px-6 lg:px-8;
  }
}
"##;

const APP_JSX: &str = r##"import { BrowserRouter as Router, Routes, Route } from 'react-router-dom';
import Layout from './components/layout/Layout';
import Home from './pages/Home';
import About from './pages/About';

function App() {
  return (
    <Router>
      <Layout>
        <Routes>
          <Route path="/" element={<Home />} />
          <Route path="/about" element={<About />} />
        </Routes>
      </Layout>
    </Router>
  );
}

export default App;
"##;

const LAYOUT_JSX: &str = r##"import Header from './Header';
import Footer from './Footer';

const Layout = ({ children }) => {
  return (
    <div className="min-h-screen flex flex-col">
      <Header />
      <main className="flex-grow container-custom py-8">
        {children}
      </main>
      <Footer />
    </div>
  );
};

export default Layout;
"##;

const HEADER_JSX: &str = r##"import { Link } from 'react-router-dom';

const Header = () => {
  return (
    <header className="bg-white shadow-sm border-b">
      <nav className="container-custom">
        <div className="flex items-center justify-between h-16">
          <Link to="/" className="text-xl font-bold text-primary-600">
            My App
          </Link>

          <div className="flex space-x-6">
            <Link
              to="/"
              className="text-gray-600 hover:text-primary-600 transition-colors"
            >
              Home
            </Link>
            <Link
              to="/about"
              className="text-gray-600 hover:text-primary-600 transition-colors"
            >
              About
            </Link>
          </div>
        </div>
      </nav>
    </header>
  );
};

export default Header;
"##;

const FOOTER_JSX: &str = r##"const Footer = () => {
  return (
    <footer className="bg-gray-50 border-t">
      <div className="container-custom py-6">
        <p className="text-center text-gray-600">
          © 2025 My App. Built with Vite + React + Tailwind CSS v4.0.
        </p>
      </div>
    </footer>
  );
};

export default Footer;
"##;

const HOME_JSX: &str = r##"import { useState } from 'react';
import { fetchData } from '../services/api';

const Home = () => {
  const [data, setData] = useState(null);
  const [loading, setLoading] = useState(false);

  const handleFetchData = async () => {
    setLoading(true);
    try {
      const result = await fetchData();
      setData(result);
    } catch (error) {
      console.error('Error fetching data:', error);
    } finally {
      setLoading(false);
    }
  };

  return (
    <div className="text-center">
      <h1 className="text-4xl font-bold text-gray-900 mb-6">
        Welcome to Vite + React + Tailwind v4.0
      </h1>

      <p className="text-lg text-gray-600 mb-8 max-w-2xl mx-auto">
        This is a clean starter template with Vite, React, Tailwind CSS v4.0,
        Axios, and React Router pre-configured for rapid development.
      </p>

      <div className="space-y-4">
        <button
          onClick={handleFetchData}
          disabled={loading}
          className="btn-primary disabled:opacity-50"
        >
          {loading ? 'Loading...' : 'Test API Call'}
        </button>

        {data && (
          <div className="mt-4 p-4 bg-green-50 border border-green-200 rounded-lg max-w-md mx-auto">
            <p className="text-green-800">API Response received!</p>
          </div>
        )}
      </div>
    </div>
  );
};

export default Home;
"##;

const ABOUT_JSX: &str = r##"const About = () => {
  return (
    <div className="max-w-4xl mx-auto">
      <h1 className="text-3xl font-bold text-gray-900 mb-6">About</h1>

      <div className="prose prose-lg max-w-none">
        <p className="text-gray-600 mb-4">
          This project was created with a CLI tool that sets up a modern
          React development environment with the following technologies:
        </p>

        <ul className="list-disc list-inside space-y-2 text-gray-600">
          <li><strong>Vite</strong> - Fast build tool and dev server</li>
          <li><strong>React</strong> - UI library</li>
          <li><strong>Tailwind CSS v4.0</strong> - Utility-first CSS framework</li>
          <li><strong>Axios</strong> - HTTP client for API calls</li>
          <li><strong>React Router</strong> - Client-side routing</li>
        </ul>

        <p className="text-gray-600 mt-6">
          The project includes a well-organized folder structure,
          pre-configured components, and ready-to-use utilities.
        </p>
      </div>
    </div>
  );
};

export default About;
"##;

const API_JS: &str = r##"import axios from 'axios';

const api = axios.create({
  baseURL: import.meta.env.VITE_API_BASE_URL || 'https://jsonplaceholder.typicode.com',
  timeout: 10000,
  headers: {
    'Content-Type': 'application/json',
  },
});

api.interceptors.request.use(
  (config) => {
    const token = localStorage.getItem('authToken');
    if (token) {
      config.headers.Authorization = `Bearer ${token}`;
    }
    return config;
  },
  (error) => {
    return Promise.reject(error);
  }
);

api.interceptors.response.use(
  (response) => response.data,
  (error) => {
    console.error('API Error:', error.response?.data || error.message);
    return Promise.reject(error);
  }
);

export const fetchData = async () => {
  const response = await api.get('/posts/1');
  return response;
};

export const postData = async (data) => {
  const response = await api.post('/posts', data);
  return response;
};

export default api;
"##;

const HELPERS_JS: &str = r##"export const formatDate = (date) => {
  return new Intl.DateTimeFormat('en-US', {
    year: 'numeric',
    month: 'long',
    day: 'numeric',
  }).format(new Date(date));
};

export const debounce = (func, wait) => {
  let timeout;
  return function executedFunction(...args) {
    const later = () => {
      clearTimeout(timeout);
      func(...args);
    };
    clearTimeout(timeout);
    timeout = setTimeout(later, wait);
  };
};

export const generateId = () => {
  return Math.random().toString(36).substr(2, 9);
};

export const capitalize = (str) => {
  return str.charAt(0).toUpperCase() + str.slice(1);
};
"##;

const ENV: &str = r##"VITE_API_BASE_URL=https://jsonplaceholder.typicode.com
VITE_APP_NAME=My Vite App
VITE_APP_VERSION=1.0.0
"##;

const ENV_EXAMPLE: &str = r##"VITE_API_BASE_URL=https://api.example.com
VITE_APP_NAME=My Vite App
VITE_APP_VERSION=1.0.0
"##;

const VITE_CONFIG: &str = r##"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'
import tailwindcss from '@tailwindcss/vite'
import path from 'path'

export default defineConfig({
  plugins: [
    react(),
    tailwindcss(),
  ],
  resolve: {
    alias: {
      '@': path.resolve(__dirname, './src'),
    },
  },
  server: {
    port: 5173,
    open: true,
  },
  build: {
    outDir: 'dist',
    sourcemap: true,
    rollupOptions: {
      output: {
        manualChunks: {
          vendor: ['react', 'react-dom'],
          router: ['react-router-dom'],
          axios: ['axios'],
        },
      },
    },
  },
})
"##;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_all_creates_every_file() {
        let temp = TempDir::new().unwrap();
        write_all(temp.path(), "demo").unwrap();

        for file in PROJECT_FILES {
            assert!(temp.path().join(file.path).is_file(), "missing {}", file.path);
        }
        assert!(temp.path().join("README.md").is_file());
    }

    #[test]
    fn test_readme_carries_project_name() {
        let rendered = readme("storefront");
        assert!(rendered.starts_with("# storefront\n"));
    }

    #[test]
    fn test_write_all_overwrites_generator_output() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.html"), "stale").unwrap();

        write_all(temp.path(), "demo").unwrap();
        let content = fs::read_to_string(temp.path().join("index.html")).unwrap();
        assert!(content.contains("loading-spinner"));
    }

    #[test]
    fn test_manifest_scripts_cover_build_preview_lint() {
        let keys: Vec<&str> = MANIFEST_SCRIPTS.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["build", "preview", "lint"]);
    }
}
