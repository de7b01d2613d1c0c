pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Household Chore Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #d7e8d0;
      --ink: #2b2a28;
      --accent: #87a96b;
      --accent-2: #2f4858;
      --overdue: #c63b2b;
      --due-soon: #d9930d;
      --on-time: #2d7a4b;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #eef4e4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      justify-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1, h2 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      margin: 0;
    }

    h1 { font-size: clamp(1.8rem, 4vw, 2.6rem); }
    h2 { font-size: 1.25rem; }

    .subtitle { margin: 0; color: #5f5c57; }

    header.bar {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 12px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 14px 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value { font-size: 1.5rem; font-weight: 600; color: var(--accent-2); }
    .stat .value.overdue { color: var(--overdue); }
    .stat .value.due-soon { color: var(--due-soon); }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      transition: transform 150ms ease;
    }

    button:active { transform: scale(0.97); }
    .btn-primary { background: var(--accent); color: white; }
    .btn-dark { background: var(--accent-2); color: white; }
    .btn-ghost { background: rgba(47, 72, 88, 0.08); color: var(--accent-2); }
    .btn-danger { background: var(--overdue); color: white; }
    .btn-small { padding: 6px 12px; font-size: 0.85rem; }

    input, select, textarea {
      font-family: inherit;
      font-size: 0.95rem;
      padding: 9px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      background: white;
      width: 100%;
    }

    label { font-size: 0.85rem; font-weight: 500; display: grid; gap: 4px; }

    .filters {
      display: grid;
      grid-template-columns: 2fr 1fr 1fr 1fr 1fr;
      gap: 10px;
    }

    @media (max-width: 700px) {
      .filters { grid-template-columns: 1fr 1fr; }
    }

    .chore-card {
      background: white;
      border-radius: 18px;
      border-left: 6px solid var(--on-time);
      padding: 16px 18px;
      display: grid;
      gap: 10px;
    }

    .chore-card.overdue { border-left-color: var(--overdue); }
    .chore-card.due-soon { border-left-color: var(--due-soon); }
    .chore-card.inactive { opacity: 0.55; }

    .chore-top {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 8px;
    }

    .chore-name { font-weight: 600; font-size: 1.05rem; }
    .chore-meta { font-size: 0.85rem; color: #6b645d; }

    .badge {
      display: inline-block;
      border-radius: 999px;
      padding: 3px 10px;
      font-size: 0.78rem;
      font-weight: 600;
      color: white;
    }

    .badge.overdue { background: var(--overdue); }
    .badge.due-soon { background: var(--due-soon); }
    .badge.on-time { background: var(--on-time); }

    .progress-track {
      height: 8px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.1);
      overflow: hidden;
    }

    .progress-fill { height: 100%; background: var(--accent); }

    .chore-actions {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 8px;
    }

    .chore-actions select { width: auto; }

    .member-dot {
      display: inline-block;
      width: 12px;
      height: 12px;
      border-radius: 50%;
      margin-right: 6px;
      vertical-align: middle;
    }

    .grid-2 {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 20px;
    }

    @media (max-width: 700px) { .grid-2 { grid-template-columns: 1fr; } }

    .card {
      background: white;
      border-radius: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      padding: 18px;
      display: grid;
      gap: 12px;
    }

    .form-grid {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 12px;
    }

    .form-grid .wide { grid-column: 1 / -1; }

    .field-error { color: var(--overdue); font-size: 0.8rem; min-height: 1em; }

    table { width: 100%; border-collapse: collapse; font-size: 0.9rem; }
    th, td { text-align: left; padding: 6px 8px; border-bottom: 1px solid rgba(47, 72, 88, 0.08); }
    th { color: #8b857d; font-size: 0.78rem; text-transform: uppercase; letter-spacing: 0.08em; }

    .status-line { font-size: 0.95rem; color: #6b645d; min-height: 1.2em; }
    .status-line[data-type="error"] { color: var(--overdue); }
    .status-line[data-type="ok"] { color: var(--on-time); }

    .member-row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 8px;
      padding: 6px 0;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    #login-view {
      width: min(420px, 100%);
      margin-top: 10vh;
    }

    .hidden { display: none !important; }
  </style>
</head>
<body>
  <main class="app" id="login-view">
    <header>
      <h1>Household Chore Tracker</h1>
      <p class="subtitle">Sign in to manage your household's chores.</p>
    </header>
    <form id="login-form" class="card">
      <label>Username
        <input id="login-username" autocomplete="username" />
      </label>
      <label>Password
        <input id="login-password" type="password" autocomplete="current-password" />
      </label>
      <button class="btn-primary" type="submit">Sign in</button>
      <div class="status-line" id="login-status"></div>
    </form>
  </main>

  <main class="app hidden" id="app-view">
    <header class="bar">
      <div>
        <h1>Household Chore Tracker</h1>
        <p class="subtitle" id="greeting"></p>
      </div>
      <div>
        <button class="btn-ghost" id="reset-btn" type="button">Reset data</button>
        <button class="btn-dark" id="logout-btn" type="button">Log out</button>
      </div>
    </header>

    <section class="panel" id="summary"></section>

    <section class="filters">
      <label>Search
        <input id="filter-search" placeholder="Chore name..." />
      </label>
      <label>Category
        <select id="filter-category"></select>
      </label>
      <label>Frequency
        <select id="filter-frequency"></select>
      </label>
      <label>Status
        <select id="filter-status">
          <option value="All">All</option>
          <option value="overdue">Overdue</option>
          <option value="due-soon">Due Soon</option>
          <option value="on-time">On Time</option>
        </select>
      </label>
      <label>Assignee
        <select id="filter-assignee"></select>
      </label>
    </section>

    <section id="chore-list" style="display: grid; gap: 12px;"></section>

    <section class="card">
      <h2 id="chore-form-title">Add a chore</h2>
      <form id="chore-form" class="form-grid">
        <label class="wide">Name
          <input id="chore-name" />
          <span class="field-error" data-field="name"></span>
        </label>
        <label class="wide">Description
          <textarea id="chore-description" rows="2"></textarea>
          <span class="field-error" data-field="description"></span>
        </label>
        <label>Category
          <select id="chore-category"></select>
        </label>
        <label>Frequency
          <select id="chore-frequency"></select>
        </label>
        <label id="per-day-wrap" class="hidden">Times per day
          <input id="chore-per-day" type="number" min="2" value="2" />
          <span class="field-error" data-field="completionsPerDay"></span>
        </label>
        <label>Estimated minutes
          <input id="chore-minutes" type="number" min="1" value="15" />
          <span class="field-error" data-field="estimatedTime"></span>
        </label>
        <label>Assignee
          <select id="chore-assignee"></select>
          <span class="field-error" data-field="assignee"></span>
        </label>
        <div class="wide">
          <button class="btn-primary" type="submit" id="chore-submit">Add chore</button>
          <button class="btn-ghost hidden" type="button" id="chore-cancel">Cancel</button>
        </div>
      </form>
    </section>

    <section class="grid-2">
      <div class="card">
        <h2>Household members</h2>
        <div id="member-list"></div>
        <form id="member-form" style="display: flex; gap: 8px;">
          <input id="member-name" placeholder="New member name" />
          <button class="btn-primary btn-small" type="submit">Add</button>
        </form>
        <span class="field-error" id="member-error"></span>
      </div>
      <div class="card">
        <h2>Breakdown</h2>
        <table>
          <thead><tr><th>Category</th><th>Chores</th></tr></thead>
          <tbody id="category-table"></tbody>
        </table>
        <table>
          <thead><tr><th>Member</th><th>Completed</th><th>Assigned</th></tr></thead>
          <tbody id="member-table"></tbody>
        </table>
      </div>
    </section>

    <div class="status-line" id="status"></div>
  </main>

  <script>
    const CATEGORIES = ['Pet Care', 'Kitchen', 'Bathroom', 'Bedroom', 'Living Room',
      'Laundry', 'Outdoor', 'General Cleaning', 'Maintenance'];
    const FREQUENCIES = ['Daily', 'Multiple Daily', 'Weekly', 'Bi-weekly', 'Monthly',
      'Quarterly', 'As Needed'];
    const STATUS_TEXT = { 'overdue': 'Overdue', 'due-soon': 'Due Soon', 'on-time': 'On Time' };

    const loginView = document.getElementById('login-view');
    const appView = document.getElementById('app-view');
    const statusEl = document.getElementById('status');

    let chores = [];
    let members = [];
    let stats = null;
    let editingId = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      if (message) setTimeout(() => { statusEl.textContent = ''; }, 2500);
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (res.status === 401) {
        showLogin();
        throw { message: 'Login required' };
      }
      if (!res.ok) {
        let body = {};
        try { body = await res.json(); } catch (e) { /* plain body */ }
        throw body;
      }
      return res.status === 204 ? null : res.json();
    };

    const post = (path, body) => api(path, {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(body)
    });

    const showLogin = () => {
      loginView.classList.remove('hidden');
      appView.classList.add('hidden');
    };

    const showApp = (user) => {
      loginView.classList.add('hidden');
      appView.classList.remove('hidden');
      document.getElementById('greeting').textContent =
        'Signed in as ' + user.username + ' (' + user.role + ')';
    };

    const fillSelect = (el, values, withAll) => {
      el.innerHTML = '';
      if (withAll) el.append(new Option('All', 'All'));
      values.forEach(([label, value]) => el.append(new Option(label, value)));
    };

    const memberName = (id) => {
      const member = members.find((m) => m.id === id);
      return member ? member.name : 'Unassigned';
    };

    const memberColor = (id) => {
      const member = members.find((m) => m.id === id);
      return member ? member.color : '#b8b2a9';
    };

    const renderSummary = () => {
      if (!stats) return;
      const cards = [
        ['Total chores', stats.totalChores, ''],
        ['Done today', stats.completedToday, ''],
        ['Done this week', stats.completedThisWeek, ''],
        ['Overdue', stats.overdueChores, 'overdue'],
        ['Due soon', stats.dueSoonChores, 'due-soon']
      ];
      document.getElementById('summary').innerHTML = cards.map(([label, value, cls]) =>
        '<div class="stat"><span class="label">' + label + '</span>' +
        '<span class="value ' + cls + '">' + value + '</span></div>').join('');

      document.getElementById('category-table').innerHTML =
        Object.entries(stats.categoryBreakdown).map(([category, count]) =>
          '<tr><td>' + category + '</td><td>' + count + '</td></tr>').join('');

      document.getElementById('member-table').innerHTML =
        Object.entries(stats.memberPerformance).map(([name, perf]) =>
          '<tr><td>' + name + '</td><td>' + perf.completed + '</td><td>' + perf.total + '</td></tr>').join('');
    };

    const choreMatchesFilters = (chore) => {
      const search = document.getElementById('filter-search').value.trim().toLowerCase();
      if (search && !chore.name.toLowerCase().includes(search)) return false;
      const category = document.getElementById('filter-category').value;
      if (category !== 'All' && chore.category !== category) return false;
      const frequency = document.getElementById('filter-frequency').value;
      if (frequency !== 'All' && chore.frequency !== frequency) return false;
      const status = document.getElementById('filter-status').value;
      if (status !== 'All' && chore.status !== status) return false;
      const assignee = document.getElementById('filter-assignee').value;
      if (assignee !== 'All' && chore.assignee !== assignee) return false;
      return true;
    };

    const renderChores = () => {
      const list = document.getElementById('chore-list');
      const visible = chores.filter(choreMatchesFilters);
      if (!visible.length) {
        list.innerHTML = '<p class="subtitle">No chores match the current filters.</p>';
        return;
      }
      list.innerHTML = visible.map((chore) => {
        const freqText = chore.frequency === 'Multiple Daily'
          ? chore.completionsPerDay + 'x Daily'
          : chore.frequency;
        const progress = chore.frequency === 'Multiple Daily'
          ? '<div class="progress-track"><div class="progress-fill" style="width:' +
            Math.min(chore.progress.percentage, 100) + '%"></div></div>' +
            '<span class="chore-meta">' + chore.progress.completed + ' of ' +
            chore.progress.total + ' today</span>'
          : '';
        const memberOptions = members.map((m) =>
          '<option value="' + m.id + '">' + m.name + '</option>').join('');
        return '<div class="chore-card ' + chore.status + (chore.isActive ? '' : ' inactive') + '">' +
          '<div class="chore-top">' +
            '<span class="chore-name">' + chore.categoryIcon + ' ' + chore.name + '</span>' +
            '<span class="badge ' + chore.status + '">' + STATUS_TEXT[chore.status] + '</span>' +
          '</div>' +
          '<span class="chore-meta">' + chore.description + '</span>' +
          '<span class="chore-meta">' + chore.category + ' · ' + freqText + ' · ' +
            chore.estimatedTime + ' min · ' +
            '<span class="member-dot" style="background:' + memberColor(chore.assignee) + '"></span>' +
            memberName(chore.assignee) + '</span>' +
          progress +
          '<div class="chore-actions">' +
            '<select data-complete-by="' + chore.id + '">' + memberOptions + '</select>' +
            '<button class="btn-primary btn-small" data-complete="' + chore.id + '"' +
              (chore.isActive ? '' : ' disabled') + '>Complete</button>' +
            '<button class="btn-ghost btn-small" data-edit="' + chore.id + '">Edit</button>' +
            '<button class="btn-ghost btn-small" data-toggle="' + chore.id + '">' +
              (chore.isActive ? 'Deactivate' : 'Activate') + '</button>' +
            '<button class="btn-danger btn-small" data-delete="' + chore.id + '">Delete</button>' +
          '</div>' +
        '</div>';
      }).join('');
    };

    const renderMembers = () => {
      document.getElementById('member-list').innerHTML = members.map((m) =>
        '<div class="member-row"><span>' +
          '<span class="member-dot" style="background:' + m.color + '"></span>' + m.name +
        '</span><button class="btn-danger btn-small" data-remove-member="' + m.id + '">Remove</button></div>'
      ).join('');

      const assigneeFilter = document.getElementById('filter-assignee');
      const current = assigneeFilter.value;
      fillSelect(assigneeFilter, members.map((m) => [m.name, m.id]), true);
      assigneeFilter.value = current || 'All';

      fillSelect(document.getElementById('chore-assignee'),
        [['Unassigned', '']].concat(members.map((m) => [m.name, m.id])), false);
    };

    const clearFieldErrors = (form) => {
      form.querySelectorAll('.field-error').forEach((el) => { el.textContent = ''; });
    };

    const showFieldErrors = (form, err) => {
      clearFieldErrors(form);
      const errors = (err && err.errors) || {};
      Object.entries(errors).forEach(([field, message]) => {
        const target = form.querySelector('[data-field="' + field + '"]');
        if (target) target.textContent = message;
      });
      if (!Object.keys(errors).length) setStatus(err.message || 'Request failed', 'error');
    };

    const refresh = async () => {
      [chores, members, stats] = await Promise.all([
        api('/api/chores'), api('/api/members'), api('/api/stats')
      ]);
      renderMembers();
      renderChores();
      renderSummary();
    };

    const choreFormPayload = () => {
      const frequency = document.getElementById('chore-frequency').value;
      const assignee = document.getElementById('chore-assignee').value;
      return {
        name: document.getElementById('chore-name').value,
        description: document.getElementById('chore-description').value,
        category: document.getElementById('chore-category').value,
        frequency,
        completionsPerDay: frequency === 'Multiple Daily'
          ? parseInt(document.getElementById('chore-per-day').value, 10) : null,
        estimatedTime: parseInt(document.getElementById('chore-minutes').value, 10) || 0,
        assignee: assignee || null,
        isActive: true
      };
    };

    const resetChoreForm = () => {
      editingId = null;
      document.getElementById('chore-form').reset();
      document.getElementById('chore-form-title').textContent = 'Add a chore';
      document.getElementById('chore-submit').textContent = 'Add chore';
      document.getElementById('chore-cancel').classList.add('hidden');
      document.getElementById('per-day-wrap').classList.add('hidden');
      clearFieldErrors(document.getElementById('chore-form'));
    };

    const startEditing = (chore) => {
      editingId = chore.id;
      document.getElementById('chore-name').value = chore.name;
      document.getElementById('chore-description').value = chore.description;
      document.getElementById('chore-category').value = chore.category;
      document.getElementById('chore-frequency').value = chore.frequency;
      document.getElementById('chore-per-day').value = chore.completionsPerDay || 2;
      document.getElementById('chore-minutes').value = chore.estimatedTime;
      document.getElementById('chore-assignee').value = chore.assignee || '';
      document.getElementById('per-day-wrap').classList.toggle('hidden',
        chore.frequency !== 'Multiple Daily');
      document.getElementById('chore-form-title').textContent = 'Edit chore';
      document.getElementById('chore-submit').textContent = 'Save changes';
      document.getElementById('chore-cancel').classList.remove('hidden');
    };

    document.getElementById('chore-frequency').addEventListener('change', (event) => {
      document.getElementById('per-day-wrap').classList.toggle('hidden',
        event.target.value !== 'Multiple Daily');
    });

    document.getElementById('chore-cancel').addEventListener('click', resetChoreForm);

    document.getElementById('chore-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const form = event.target;
      try {
        if (editingId) {
          await api('/api/chores/' + editingId, {
            method: 'PUT',
            headers: { 'content-type': 'application/json' },
            body: JSON.stringify(choreFormPayload())
          });
          setStatus('Chore updated', 'ok');
        } else {
          await post('/api/chores', choreFormPayload());
          setStatus('Chore added', 'ok');
        }
        resetChoreForm();
        await refresh();
      } catch (err) {
        showFieldErrors(form, err);
      }
    });

    document.getElementById('chore-list').addEventListener('click', async (event) => {
      const button = event.target.closest('button');
      if (!button) return;
      try {
        if (button.dataset.complete) {
          const select = document.querySelector('[data-complete-by="' + button.dataset.complete + '"]');
          await post('/api/chores/' + button.dataset.complete + '/complete',
            { completedBy: select.value });
          setStatus('Nice work!', 'ok');
        } else if (button.dataset.toggle) {
          await post('/api/chores/' + button.dataset.toggle + '/toggle', {});
        } else if (button.dataset.delete) {
          if (!window.confirm('Delete this chore and its history?')) return;
          await api('/api/chores/' + button.dataset.delete, { method: 'DELETE' });
        } else if (button.dataset.edit) {
          const chore = chores.find((c) => c.id === button.dataset.edit);
          if (chore) startEditing(chore);
          return;
        }
        await refresh();
      } catch (err) {
        setStatus(err.message || 'Request failed', 'error');
      }
    });

    document.getElementById('member-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const errorEl = document.getElementById('member-error');
      errorEl.textContent = '';
      try {
        await post('/api/members', { name: document.getElementById('member-name').value });
        document.getElementById('member-name').value = '';
        await refresh();
      } catch (err) {
        errorEl.textContent = (err.errors && err.errors.name) || err.message || 'Request failed';
      }
    });

    document.getElementById('member-list').addEventListener('click', async (event) => {
      const button = event.target.closest('button');
      if (!button || !button.dataset.removeMember) return;
      if (!window.confirm('Remove this member? Their chores become unassigned and their history is deleted.')) return;
      try {
        await api('/api/members/' + button.dataset.removeMember, { method: 'DELETE' });
        await refresh();
      } catch (err) {
        setStatus(err.message || 'Request failed', 'error');
      }
    });

    document.getElementById('login-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const loginStatus = document.getElementById('login-status');
      loginStatus.textContent = '';
      try {
        const user = await post('/api/login', {
          username: document.getElementById('login-username').value,
          password: document.getElementById('login-password').value
        });
        showApp(user);
        await refresh();
      } catch (err) {
        loginStatus.dataset.type = 'error';
        loginStatus.textContent = err.message || 'Login failed';
      }
    });

    document.getElementById('logout-btn').addEventListener('click', async () => {
      try { await post('/api/logout', {}); } catch (err) { /* session already gone */ }
      showLogin();
    });

    document.getElementById('reset-btn').addEventListener('click', async () => {
      if (!window.confirm('This will reset all data to defaults. Are you sure?')) return;
      try {
        await post('/api/reset', {});
        showLogin();
      } catch (err) {
        setStatus(err.message || 'Reset failed', 'error');
      }
    });

    ['filter-search', 'filter-category', 'filter-frequency', 'filter-status', 'filter-assignee']
      .forEach((id) => {
        document.getElementById(id).addEventListener('input', renderChores);
      });

    fillSelect(document.getElementById('filter-category'),
      CATEGORIES.map((c) => [c, c]), true);
    fillSelect(document.getElementById('filter-frequency'),
      FREQUENCIES.map((f) => [f, f]), true);
    fillSelect(document.getElementById('chore-category'),
      CATEGORIES.map((c) => [c, c]), false);
    fillSelect(document.getElementById('chore-frequency'),
      FREQUENCIES.map((f) => [f, f]), false);

    (async () => {
      try {
        const session = await fetch('/api/session').then((res) => res.json());
        if (session.user) {
          showApp(session.user);
          await refresh();
        } else {
          showLogin();
        }
      } catch (err) {
        showLogin();
      }
    })();
  </script>
</body>
</html>
"#;
