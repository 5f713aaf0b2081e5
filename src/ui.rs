pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f4f1ea;
      --bg-2: #cfe3d4;
      --ink: #26302b;
      --accent: #2e8b57;
      --accent-2: #2f4858;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e7f0e4 60%, #f3efe7 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(880px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .date-chip {
      background: rgba(46, 139, 87, 0.12);
      color: var(--accent);
      border-radius: 999px;
      padding: 6px 14px;
      font-weight: 600;
      font-size: 0.9rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      color: #6b645d;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .banner {
      display: none;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      background: rgba(198, 59, 43, 0.1);
      border: 1px solid rgba(198, 59, 43, 0.3);
      color: var(--danger);
      border-radius: 16px;
      padding: 12px 16px;
      font-weight: 500;
    }

    .banner.visible {
      display: flex;
    }

    .banner .banner-actions {
      display: flex;
      gap: 8px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.97);
    }

    button:disabled {
      opacity: 0.55;
      cursor: not-allowed;
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(46, 139, 87, 0.3);
    }

    .btn-secondary {
      background: var(--accent-2);
      color: white;
    }

    .btn-ghost {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .btn-danger {
      background: var(--danger);
      color: white;
    }

    .habit-list {
      display: grid;
      gap: 14px;
    }

    .habit-card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 10px;
    }

    .habit-head {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 8px;
    }

    .habit-name {
      font-size: 1.15rem;
      font-weight: 600;
      margin: 0;
    }

    .habit-category {
      background: rgba(47, 72, 88, 0.1);
      color: var(--accent-2);
      border-radius: 999px;
      padding: 3px 10px;
      font-size: 0.8rem;
      font-weight: 600;
    }

    .habit-description {
      margin: 0;
      color: #6f6a65;
      font-size: 0.92rem;
    }

    .progress-row {
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .progress-track {
      flex: 1;
      height: 10px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.1);
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      border-radius: 999px;
      background: linear-gradient(90deg, var(--accent), #63c08a);
      transition: width 300ms ease;
    }

    .progress-value {
      font-weight: 600;
      font-size: 0.9rem;
      color: var(--accent-2);
      min-width: 44px;
      text-align: right;
    }

    .habit-actions {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .empty {
      text-align: center;
      color: #6f6a65;
      padding: 26px 0;
    }

    .form-card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 12px;
    }

    .form-card h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    input, textarea, select {
      width: 100%;
      border: 1px solid rgba(47, 72, 88, 0.18);
      border-radius: 12px;
      padding: 10px 12px;
      font-family: inherit;
      font-size: 0.95rem;
      color: var(--ink);
      background: #fcfbf8;
    }

    .char-count {
      text-align: right;
      font-size: 0.8rem;
      color: #8b857d;
    }

    .form-error {
      color: var(--danger);
      font-size: 0.9rem;
      min-height: 1.1em;
    }

    .form-actions {
      display: flex;
      justify-content: flex-end;
      gap: 8px;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
      overflow-wrap: anywhere;
    }

    .stat .value.highlight {
      color: var(--accent);
    }

    .toolbar {
      display: flex;
      justify-content: flex-end;
    }

    .toast {
      position: fixed;
      right: 24px;
      bottom: 24px;
      max-width: 320px;
      background: var(--accent-2);
      color: white;
      border-radius: 16px;
      padding: 14px 40px 14px 16px;
      box-shadow: 0 18px 40px rgba(47, 72, 88, 0.35);
      font-size: 0.95rem;
      opacity: 0;
      transform: translateY(12px);
      transition: opacity 250ms ease, transform 250ms ease;
      pointer-events: none;
    }

    .toast.visible {
      opacity: 1;
      transform: translateY(0);
      pointer-events: auto;
    }

    .toast-close {
      position: absolute;
      top: 6px;
      right: 10px;
      background: none;
      color: rgba(255, 255, 255, 0.7);
      font-size: 1.1rem;
      padding: 2px 6px;
    }

    .loading-note {
      color: #6f6a65;
      font-size: 0.9rem;
      min-height: 1.2em;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .habit-actions button {
        flex: 1;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Habit Tracker</h1>
        <p class="subtitle">Mark each day, form the habit in 21.</p>
      </div>
      <span class="date-chip">{{DATE}}</span>
    </header>

    <div class="banner" id="error-banner" role="alert">
      <span id="error-text"></span>
      <span class="banner-actions">
        <button class="btn-ghost" id="retry-btn" type="button">Retry</button>
        <button class="btn-ghost" id="dismiss-btn" type="button">Dismiss</button>
      </span>
    </div>

    <div class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="habits" role="tab" aria-selected="true">Habits</button>
      <button class="tab" type="button" data-tab="stats" role="tab" aria-selected="false">Statistics</button>
    </div>

    <section id="habits-view">
      <div class="loading-note" id="loading-note"></div>
      <div class="habit-list" id="habit-list"></div>

      <form class="form-card" id="add-form">
        <h2>Add a habit</h2>
        <div>
          <input type="text" id="name-input" placeholder="Habit name *" maxlength="50" autocomplete="off" />
          <div class="char-count"><span id="name-count">0</span>/50</div>
        </div>
        <textarea id="description-input" placeholder="Description (optional)" rows="2"></textarea>
        <select id="category-input">
          <option value="">Choose a category</option>
          <option value="Health">Health</option>
          <option value="Growth">Growth</option>
          <option value="Work">Work</option>
          <option value="Rest">Rest</option>
        </select>
        <div class="form-error" id="form-error"></div>
        <div class="form-actions">
          <button class="btn-primary" type="submit">Add habit</button>
        </div>
      </form>

      <div class="toolbar" style="margin-top: 14px;">
        <button class="btn-danger" id="reset-btn" type="button">Reset all progress</button>
      </div>
    </section>

    <section id="stats-view" hidden>
      <div class="panel">
        <div class="stat">
          <span class="label">Total progress</span>
          <span class="value highlight" id="stat-total-progress">0%</span>
        </div>
        <div class="stat">
          <span class="label">Completed today</span>
          <span class="value" id="stat-completed-today">0</span>
        </div>
        <div class="stat">
          <span class="label">Best habit</span>
          <span class="value" id="stat-best-habit">&mdash;</span>
        </div>
        <div class="stat">
          <span class="label">Total habits</span>
          <span class="value" id="stat-total-habits">0</span>
        </div>
        <div class="stat">
          <span class="label">Streak</span>
          <span class="value" id="stat-streak">0 days</span>
        </div>
      </div>
    </section>
  </main>

  <div class="toast" id="toast">
    <span id="toast-text"></span>
    <button class="toast-close" id="toast-close" type="button" aria-label="Close">&times;</button>
  </div>

  <script>
    const habitListEl = document.getElementById('habit-list');
    const loadingNoteEl = document.getElementById('loading-note');
    const errorBannerEl = document.getElementById('error-banner');
    const errorTextEl = document.getElementById('error-text');
    const formEl = document.getElementById('add-form');
    const nameInput = document.getElementById('name-input');
    const nameCountEl = document.getElementById('name-count');
    const descriptionInput = document.getElementById('description-input');
    const categoryInput = document.getElementById('category-input');
    const formErrorEl = document.getElementById('form-error');
    const toastEl = document.getElementById('toast');
    const toastTextEl = document.getElementById('toast-text');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const habitsView = document.getElementById('habits-view');
    const statsView = document.getElementById('stats-view');

    let appState = { habits: [], loading: true, error: null };
    let toastTimer = null;

    const esc = (text) => String(text).replace(/[&<>"']/g, (ch) => ({
      '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
    }[ch]));

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        let message = 'Request failed';
        try {
          const body = await res.json();
          if (body.error) message = body.error;
        } catch (_err) {
          // body was not JSON
        }
        throw new Error(message);
      }
      return res.json();
    };

    const post = (path, body) => api(path, {
      method: 'POST',
      headers: body ? { 'content-type': 'application/json' } : undefined,
      body: body ? JSON.stringify(body) : undefined
    });

    const applyState = (state) => {
      appState = state;
      renderHabits();
      renderError();
    };

    const renderError = () => {
      if (appState.error) {
        errorTextEl.textContent = appState.error;
        errorBannerEl.classList.add('visible');
      } else {
        errorBannerEl.classList.remove('visible');
      }
    };

    const renderHabits = () => {
      loadingNoteEl.textContent = appState.loading ? 'Loading...' : '';

      if (!appState.habits.length) {
        habitListEl.innerHTML = '<div class="empty">No habits yet. Add the first one below.</div>';
        return;
      }

      habitListEl.innerHTML = appState.habits.map((habit) => {
        const formed = habit.progress >= 100;
        const category = habit.category
          ? `<span class="habit-category">${esc(habit.category)}</span>`
          : '';
        const description = habit.description
          ? `<p class="habit-description">${esc(habit.description)}</p>`
          : '';
        return `
          <div class="habit-card" data-id="${habit.id}">
            <div class="habit-head">
              <p class="habit-name">${esc(habit.name)}</p>
              ${category}
            </div>
            ${description}
            <div class="progress-row">
              <div class="progress-track">
                <div class="progress-fill" style="width: ${habit.progress}%"></div>
              </div>
              <span class="progress-value">${habit.progress}%</span>
            </div>
            <div class="habit-actions">
              <button class="btn-primary" data-action="mark" ${formed ? 'disabled' : ''}>
                ${formed ? 'Formed' : 'Mark today'}
              </button>
              <button class="btn-ghost" data-action="rename">Rename</button>
              <button class="btn-ghost" data-action="delete">Delete</button>
            </div>
          </div>`;
      }).join('');
    };

    const renderStats = (stats) => {
      document.getElementById('stat-total-progress').textContent = `${stats.totalProgress}%`;
      document.getElementById('stat-completed-today').textContent = stats.completedToday;
      document.getElementById('stat-best-habit').textContent = stats.bestHabit
        ? stats.bestHabit.name
        : '—';
      document.getElementById('stat-total-habits').textContent = stats.totalHabits;
      const days = stats.streak === 1 ? 'day' : 'days';
      document.getElementById('stat-streak').textContent = `${stats.streak} ${days}`;
    };

    const loadHabits = async () => {
      applyState(await api('/api/habits'));
    };

    const loadStats = async () => {
      renderStats(await api('/api/stats'));
    };

    const showToast = (text) => {
      toastTextEl.textContent = text;
      toastEl.classList.add('visible');
      clearTimeout(toastTimer);
      toastTimer = setTimeout(() => toastEl.classList.remove('visible'), 7500);
    };

    const refresh = () => Promise.all([loadHabits(), loadStats()]);

    habitListEl.addEventListener('click', async (event) => {
      const button = event.target.closest('button[data-action]');
      if (!button) return;
      const card = button.closest('.habit-card');
      const id = card.dataset.id;
      const action = button.dataset.action;

      try {
        if (action === 'mark') {
          const result = await post(`/api/habits/${id}/mark`);
          applyState(result.state);
          showToast(result.quote);
          await loadStats();
        } else if (action === 'rename') {
          const habit = appState.habits.find((h) => String(h.id) === id);
          const name = prompt('New habit name:', habit ? habit.name : '');
          if (name === null) return;
          applyState(await api(`/api/habits/${id}`, {
            method: 'PATCH',
            headers: { 'content-type': 'application/json' },
            body: JSON.stringify({ name })
          }));
        } else if (action === 'delete') {
          if (!confirm('Delete this habit?')) return;
          applyState(await api(`/api/habits/${id}`, { method: 'DELETE' }));
          await loadStats();
        }
      } catch (err) {
        errorTextEl.textContent = err.message;
        errorBannerEl.classList.add('visible');
      }
    });

    formEl.addEventListener('submit', async (event) => {
      event.preventDefault();
      formErrorEl.textContent = '';

      const name = nameInput.value.trim();
      if (!name) {
        formErrorEl.textContent = 'Enter a habit name';
        return;
      }
      if (name.length > 50) {
        formErrorEl.textContent = 'The name must be 50 characters or fewer';
        return;
      }

      try {
        applyState(await post('/api/habits', {
          name,
          description: descriptionInput.value.trim(),
          category: categoryInput.value
        }));
        formEl.reset();
        nameCountEl.textContent = '0';
        await loadStats();
      } catch (err) {
        formErrorEl.textContent = err.message;
      }
    });

    nameInput.addEventListener('input', () => {
      nameCountEl.textContent = String(nameInput.value.length);
    });

    document.getElementById('reset-btn').addEventListener('click', async () => {
      if (!confirm('Reset progress for every habit?')) return;
      applyState(await post('/api/habits/reset'));
      await loadStats();
    });

    document.getElementById('retry-btn').addEventListener('click', async () => {
      applyState(await post('/api/habits/reload'));
      await loadStats();
    });

    document.getElementById('dismiss-btn').addEventListener('click', async () => {
      applyState(await post('/api/error/clear'));
    });

    document.getElementById('toast-close').addEventListener('click', () => {
      toastEl.classList.remove('visible');
    });

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        tabs.forEach((tab) => {
          const isActive = tab === button;
          tab.classList.toggle('active', isActive);
          tab.setAttribute('aria-selected', String(isActive));
        });
        const showStats = button.dataset.tab === 'stats';
        habitsView.hidden = showStats;
        statsView.hidden = !showStats;
        if (showStats) {
          loadStats().catch(() => {});
        }
      });
    });

    refresh().catch((err) => {
      errorTextEl.textContent = err.message;
      errorBannerEl.classList.add('visible');
    });
  </script>
</body>
</html>
"#;
