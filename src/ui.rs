pub fn render_index(total_days: u32, training_days: usize) -> String {
    INDEX_HTML
        .replace("{{TOTAL_DAYS}}", &total_days.to_string())
        .replace("{{TRAINING_DAYS}}", &training_days.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>90-Day Challenge</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4f0;
      --bg-2: #bfe3cd;
      --ink: #22302a;
      --accent: #2d9a63;
      --accent-2: #1f4538;
      --warn: #d98324;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(31, 69, 56, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #dff0e4 60%, #f2f7f0 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 0;
      color: #55675d;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(31, 69, 56, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7d8b82;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.today {
      color: var(--accent);
    }

    .controls {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: center;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 8px;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.4;
      cursor: default;
    }

    .btn-start, .btn-complete {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(45, 154, 99, 0.3);
    }

    .btn-pause, .btn-resume, .btn-day {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(31, 69, 56, 0.25);
    }

    .btn-abort {
      background: var(--danger);
      color: white;
      box-shadow: 0 10px 24px rgba(198, 59, 43, 0.25);
    }

    input[type="number"], select {
      border: 1px solid rgba(31, 69, 56, 0.2);
      border-radius: 12px;
      padding: 10px 12px;
      font-size: 0.95rem;
      font-family: inherit;
      width: 90px;
      background: white;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(31, 69, 56, 0.08);
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.95rem;
    }

    th, td {
      text-align: left;
      padding: 10px 8px;
      border-bottom: 1px solid rgba(31, 69, 56, 0.08);
    }

    th {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #7d8b82;
    }

    td input[type="number"] {
      width: 80px;
    }

    #chart {
      width: 100%;
      height: 240px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(31, 69, 56, 0.12);
    }

    .chart-label {
      fill: #74816f;
      font-size: 11px;
    }

    .exercise {
      border-bottom: 1px solid rgba(31, 69, 56, 0.08);
      padding: 10px 0;
    }

    .exercise:last-child {
      border-bottom: none;
    }

    .exercise .name {
      font-weight: 600;
    }

    .exercise .focus {
      font-size: 0.85rem;
      color: #7d8b82;
      text-transform: uppercase;
      letter-spacing: 0.08em;
    }

    .status {
      font-size: 0.95rem;
      color: #5f6e64;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .status[data-type="warn"] {
      color: var(--warn);
    }

    .hint {
      margin: 0;
      color: #67756c;
      font-size: 0.9rem;
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
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>90-Day Challenge</h1>
      <p class="subtitle">{{TOTAL_DAYS}} days, {{TRAINING_DAYS}} workouts. Record your reps, pause when life happens.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Day</span>
        <span id="day" class="value">--</span>
      </div>
      <div class="stat">
        <span class="label">Completed</span>
        <span id="completed" class="value">--</span>
      </div>
      <div class="stat">
        <span class="label">Remaining</span>
        <span id="remaining" class="value">--</span>
      </div>
      <div class="stat">
        <span class="label">Today</span>
        <span id="today-status" class="value today">--</span>
      </div>
    </section>

    <section class="controls" id="controls">
      <button class="btn-start" id="start-btn" type="button">Start challenge</button>
      <label>Day <input type="number" id="day-input" min="1" max="{{TOTAL_DAYS}}" value="1" /></label>
      <button class="btn-day" id="day-btn" type="button">Set day</button>
      <label>Level
        <select id="level-select">
          <option value="1">1</option>
          <option value="2">2</option>
          <option value="3">3</option>
        </select>
      </label>
      <button class="btn-pause" id="pause-btn" type="button">Pause (7 days)</button>
      <button class="btn-resume" id="resume-btn" type="button">Resume</button>
      <button class="btn-abort" id="abort-btn" type="button">Abort</button>
    </section>

    <section class="card" id="workout-card">
      <h2 id="workout-title">Today's workout</h2>
      <p class="subtitle" id="workout-subtitle"></p>
      <table id="workout-table">
        <thead>
          <tr>
            <th>Exercise</th>
            <th>Level</th>
            <th>Target</th>
            <th>Reps done</th>
          </tr>
        </thead>
        <tbody id="workout-body"></tbody>
      </table>
      <p style="margin-top: 14px">
        <button class="btn-complete" id="complete-btn" type="button">Save results</button>
      </p>
    </section>

    <section class="card">
      <h2>History</h2>
      <p class="subtitle" id="history-subtitle">Total reps per day, last 30 days.</p>
      <svg id="chart" viewBox="0 0 600 240" aria-label="History chart" role="img"></svg>
    </section>

    <section class="card">
      <h2>Exercises</h2>
      <div id="exercise-list"></div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Your identity lives in this browser only. Clearing site data starts you over.</p>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const dayEl = document.getElementById('day');
    const completedEl = document.getElementById('completed');
    const remainingEl = document.getElementById('remaining');
    const todayStatusEl = document.getElementById('today-status');
    const dayInput = document.getElementById('day-input');
    const levelSelect = document.getElementById('level-select');
    const workoutCard = document.getElementById('workout-card');
    const workoutTitle = document.getElementById('workout-title');
    const workoutSubtitle = document.getElementById('workout-subtitle');
    const workoutBody = document.getElementById('workout-body');
    const completeBtn = document.getElementById('complete-btn');
    const chartEl = document.getElementById('chart');
    const historySubtitle = document.getElementById('history-subtitle');
    const exerciseList = document.getElementById('exercise-list');

    const buttons = {
      start: document.getElementById('start-btn'),
      day: document.getElementById('day-btn'),
      pause: document.getElementById('pause-btn'),
      resume: document.getElementById('resume-btn'),
      abort: document.getElementById('abort-btn')
    };

    const userId = (() => {
      let id = localStorage.getItem('challenge90_user');
      if (!id) {
        id = 'u-' + Math.random().toString(36).slice(2) + Date.now().toString(36);
        localStorage.setItem('challenge90_user', id);
      }
      return id;
    })();

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const api = async (path, options = {}) => {
      const headers = { 'x-user-id': userId, ...(options.headers || {}) };
      if (options.body) {
        headers['content-type'] = 'application/json';
      }
      const res = await fetch(path, { ...options, headers });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const statusLabels = {
      resting_paused: 'Paused',
      rest_day: 'Rest day',
      done: 'Done',
      pending: 'Pending'
    };

    const renderChallenge = (data) => {
      const none = data.state === 'none';
      buttons.start.disabled = !none;
      buttons.day.disabled = none;
      buttons.pause.disabled = none || data.state !== 'active';
      buttons.resume.disabled = none || data.state === 'active';
      buttons.abort.disabled = none;
      dayInput.disabled = none;
      levelSelect.disabled = none;

      if (none) {
        dayEl.textContent = '--';
        completedEl.textContent = '--';
        remainingEl.textContent = '--';
        todayStatusEl.textContent = 'No challenge';
        workoutCard.style.display = 'none';
        return;
      }

      dayEl.textContent = data.challenge_complete ? 'Done!' : data.current_day;
      completedEl.textContent = data.completed_days;
      remainingEl.textContent = data.remaining_days;
      todayStatusEl.textContent = statusLabels[data.today_status] || data.today_status;
      dayInput.value = Math.min(data.current_day, Number(dayInput.max));
      levelSelect.value = String(Math.min(data.level, 3));

      if (data.state === 'paused') {
        setStatus(`Paused until ${data.paused_until} (${data.pause_days_left} days left).`, 'warn');
      } else if (data.state === 'expired') {
        setStatus('Pause expired. Resume to continue.', 'warn');
      }
    };

    const targetText = (ex) => {
      if (ex.metric === 'time') {
        return `${ex.rounds} x ${ex.duration_minutes} min`;
      }
      return `${ex.sets} x ${ex.reps}`;
    };

    const renderWorkout = (data) => {
      const showTable = data.today_status === 'pending' || data.today_status === 'done';
      workoutCard.style.display = '';
      workoutBody.innerHTML = '';

      if (data.today_status === 'resting_paused') {
        workoutTitle.textContent = 'Paused';
        workoutSubtitle.textContent = 'No workout while the challenge is paused.';
      } else if (data.today_status === 'rest_day') {
        workoutTitle.textContent = `Day ${data.day}: rest`;
        workoutSubtitle.textContent = 'Nothing scheduled. Enjoy it.';
      } else {
        workoutTitle.textContent = `Day ${data.day}: ${data.workout}`;
        const parts = [];
        if (data.warm_up) parts.push(`Warm-up: ${data.warm_up}`);
        if (data.cool_down) parts.push(`Cool-down: ${data.cool_down}`);
        workoutSubtitle.textContent = parts.join(' | ');
      }

      completeBtn.style.display = data.today_status === 'pending' ? '' : 'none';
      document.getElementById('workout-table').style.display = showTable ? '' : 'none';

      if (showTable) {
        for (const ex of data.exercises) {
          const row = document.createElement('tr');
          row.innerHTML = `
            <td>${ex.name}</td>
            <td>${ex.level}</td>
            <td>${targetText(ex)}</td>
            <td><input type="number" min="0" value="0" data-exercise="${ex.exercise_id}" /></td>
          `;
          workoutBody.appendChild(row);
        }
      }
    };

    const renderChart = (history) => {
      const points = history.days.map((d) => ({ label: d.date.slice(5), value: d.reps }));
      historySubtitle.textContent =
        `Total reps per day, last 30 days. All time: ${history.total_reps} reps over ${history.active_days} active days.`;

      if (!points.some((p) => p.value > 0)) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No sessions yet</text>';
        return;
      }

      const width = 600;
      const height = 240;
      const paddingX = 44;
      const paddingY = 34;
      const top = 20;

      const values = points.map((p) => p.value);
      let min = 0;
      let max = Math.max(...values);
      if (min === max) {
        max += 1;
      }

      const range = max - min;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const path = points
        .map((p, i) => `${i === 0 ? 'M' : 'L'} ${x(i).toFixed(2)} ${y(p.value).toFixed(2)}`)
        .join(' ');

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${Math.round(value)}</text>`;
      }

      const labelEvery = Math.ceil(points.length / 8);
      const xLabels = points
        .map((p, i) => {
          if (i % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(i)}" y="${height - paddingY + 18}" text-anchor="middle">${p.label}</text>`;
        })
        .join('');

      const circles = points
        .filter((p) => p.value > 0)
        .map((p) => `<circle class="chart-point" cx="${x(points.indexOf(p))}" cy="${y(p.value)}" r="3" />`)
        .join('');

      chartEl.innerHTML = `${grid}<path class="chart-line" d="${path}" />${circles}${xLabels}`;
    };

    const renderExercises = (exercises) => {
      exerciseList.innerHTML = '';
      for (const ex of exercises) {
        const div = document.createElement('div');
        div.className = 'exercise';
        div.innerHTML = `
          <div class="name">${ex.name} (Level ${ex.level})</div>
          <div>${ex.description}</div>
          <div class="focus">${ex.focus}</div>
        `;
        exerciseList.appendChild(div);
      }
    };

    const loadChallenge = async () => {
      const data = await api('/api/challenge');
      renderChallenge(data);
      if (data.state !== 'none') {
        renderWorkout(await api('/api/workout'));
      }
    };

    const loadHistory = async () => {
      renderChart(await api('/api/history'));
    };

    const refresh = async () => {
      await Promise.all([loadChallenge(), loadHistory()]);
    };

    const action = (path, body) => async () => {
      setStatus('Saving...', '');
      try {
        await api(path, { method: 'POST', body: body ? JSON.stringify(body()) : undefined });
        await refresh();
        setStatus('Saved', 'ok');
        setTimeout(() => setStatus('', ''), 1200);
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    buttons.start.addEventListener('click', action('/api/challenge/start'));
    buttons.day.addEventListener('click', action('/api/challenge/day', () => ({ day: Number(dayInput.value) })));
    buttons.pause.addEventListener('click', action('/api/challenge/pause'));
    buttons.resume.addEventListener('click', action('/api/challenge/resume'));
    buttons.abort.addEventListener('click', () => {
      if (confirm('Abort the challenge? Your sessions stay, the challenge is deleted.')) {
        action('/api/challenge/abort')();
      }
    });
    levelSelect.addEventListener('change', action('/api/challenge/level', () => ({ level: Number(levelSelect.value) })));
    completeBtn.addEventListener('click', action('/api/workout/complete', () => ({
      results: Array.from(workoutBody.querySelectorAll('input[data-exercise]')).map((input) => ({
        exercise_id: input.dataset.exercise,
        reps: Math.max(0, Number(input.value) || 0)
      }))
    })));

    api('/api/exercises').then(renderExercises).catch((err) => setStatus(err.message, 'error'));
    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
